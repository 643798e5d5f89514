//! Name validation and case conversion for generated artifacts.

use crate::domain::error::DomainError;

/// Validate an artifact name: starts with an uppercase ASCII letter, then
/// ASCII alphanumerics separated by single spaces.
pub fn validate_artifact_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name cannot be empty")),
        Some(c) if !c.is_ascii_uppercase() => {
            return Err(invalid("must start with an uppercase letter"));
        }
        Some(_) => {}
    }
    if name.ends_with(' ') || name.contains("  ") {
        return Err(invalid("words must be separated by a single space"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(invalid("only letters, digits and spaces are allowed"));
    }
    Ok(())
}

/// Validate a module name: `^[a-z][a-z0-9]*$`.
pub fn validate_module_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => Err(invalid("module name cannot be empty")),
        Some(c) if !c.is_ascii_lowercase() => Err(invalid("must start with a lowercase letter")),
        Some(_) if chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) => Ok(()),
        Some(_) => Err(invalid("only lowercase letters and digits are allowed")),
    }
}

/// Capitalize space-separated words and concatenate them.
///
/// | Input | Output |
/// |-------|--------|
/// | "Order" | "Order" |
/// | "Order item" | "OrderItem" |
pub fn to_class_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Lower the first character: `OrderItem` → `orderItem`.
pub fn to_camel_case(class_name: &str) -> String {
    let mut chars = class_name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// REST path segment: `OrderItem` → `order-items`.
pub fn to_resource_path(class_name: &str) -> String {
    let mut kebab = String::with_capacity(class_name.len() + 4);
    for (i, c) in class_name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                kebab.push('-');
            }
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    if kebab.ends_with('s') || kebab.ends_with('x') {
        kebab + "es"
    } else if kebab.ends_with('y') && !kebab.ends_with("ay") && !kebab.ends_with("ey") {
        kebab.pop();
        kebab + "ies"
    } else {
        kebab + "s"
    }
}
