//! Resource classification heuristic.
//!
//! Classification is a targeted textual check, not a grammar-aware parse.
//! Callers only ever see the closed [`ResourceType`] / [`MapperType`] pair
//! returned by [`classify`], so the heuristic can be replaced wholesale.

use crate::domain::conventions::{DTO_SUFFIXES, IMPLEMENTATION_SUFFIX};
use crate::domain::value_objects::{MapperType, ResourceType};

const ENTITY_MARKERS: &[&str] = &["@Entity", "@Table"];
const SERVICE_MARKER: &str = "@Service";
const CONTROLLER_MARKERS: &[&str] = &["@RestController", "@Controller"];
const REPOSITORY_MARKER: &str = "@Repository";
const MAPPER_MARKER: &str = "@Mapper";
const FRAMEWORK_MAPPER_ARGUMENT: &str = "componentModel";

/// Outcome of classifying a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub resource_type: ResourceType,
    pub mapper_type: MapperType,
}

impl Classification {
    const fn of(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            mapper_type: MapperType::None,
        }
    }
}

/// Classify a file by its stem (file name without extension) and content.
///
/// Markers are checked in priority order; the first hit wins.
pub fn classify(file_stem: &str, content: &str) -> Classification {
    if declares_enum(content) {
        return Classification::of(ResourceType::Enum);
    }
    if ENTITY_MARKERS.iter().any(|m| contains_annotation(content, m)) {
        return Classification::of(ResourceType::Entity);
    }
    if contains_annotation(content, SERVICE_MARKER) {
        return Classification::of(ResourceType::Service);
    }
    if CONTROLLER_MARKERS
        .iter()
        .any(|m| contains_annotation(content, m))
    {
        return Classification::of(ResourceType::Controller);
    }
    if contains_annotation(content, REPOSITORY_MARKER) {
        return Classification::of(ResourceType::Repository);
    }
    if DTO_SUFFIXES.iter().any(|s| file_stem.ends_with(s)) {
        return Classification::of(ResourceType::Dto);
    }
    if contains_annotation(content, MAPPER_MARKER) {
        let framework = annotation_arguments(content, MAPPER_MARKER)
            .is_some_and(|args| args.contains(FRAMEWORK_MAPPER_ARGUMENT));
        let mapper_type = if framework {
            MapperType::FrameworkMapper
        } else {
            MapperType::PlainMapper
        };
        return Classification {
            resource_type: ResourceType::Mapper,
            mapper_type,
        };
    }
    if declares_interface(content) {
        return classify_interface_by_name(file_stem);
    }
    Classification::of(ResourceType::Unknown)
}

/// Whether the stem names an implementation file.
pub fn is_implementation(file_stem: &str) -> bool {
    file_stem.len() > IMPLEMENTATION_SUFFIX.len() && file_stem.ends_with(IMPLEMENTATION_SUFFIX)
}

/// Merge key for a file: the stem with the implementation suffix stripped.
pub fn merge_key(file_stem: &str) -> &str {
    if is_implementation(file_stem) {
        &file_stem[..file_stem.len() - IMPLEMENTATION_SUFFIX.len()]
    } else {
        file_stem
    }
}

/// Public logical name: the merge key without the role suffix of its type.
pub fn logical_name(key: &str, resource_type: ResourceType) -> String {
    match resource_type.role_suffix() {
        Some(suffix) if key.len() > suffix.len() && key.ends_with(suffix) => {
            key[..key.len() - suffix.len()].to_string()
        }
        _ => key.to_string(),
    }
}

fn classify_interface_by_name(file_stem: &str) -> Classification {
    let key = merge_key(file_stem);
    if key.ends_with("Repository") {
        Classification::of(ResourceType::Repository)
    } else if key.ends_with("Service") {
        Classification::of(ResourceType::Service)
    } else if key.ends_with("Mapper") {
        Classification {
            resource_type: ResourceType::Mapper,
            mapper_type: MapperType::PlainMapper,
        }
    } else {
        Classification::of(ResourceType::Unknown)
    }
}

fn declares_enum(content: &str) -> bool {
    content
        .lines()
        .map(str::trim_start)
        .filter(|line| !is_comment(line))
        .any(|line| line.split_whitespace().any(|w| w == "enum"))
}

fn declares_interface(content: &str) -> bool {
    content
        .lines()
        .map(str::trim_start)
        .filter(|line| !is_comment(line))
        .any(|line| line.split_whitespace().any(|w| w == "interface"))
}

/// Annotation check that does not confuse `@Controller` with `@ControllerAdvice`.
fn contains_annotation(content: &str, annotation: &str) -> bool {
    annotation_ends(content, annotation).next().is_some()
}

/// Byte offsets just past each whole-word occurrence of `annotation`.
fn annotation_ends<'a>(content: &'a str, annotation: &'a str) -> impl Iterator<Item = usize> + 'a {
    content
        .match_indices(annotation)
        .map(move |(idx, _)| idx + annotation.len())
        .filter(move |&end| {
            content[end..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric() && c != '_')
        })
}

/// Text between the parentheses following the first `annotation`, if any.
fn annotation_arguments<'a>(content: &'a str, annotation: &str) -> Option<&'a str> {
    let end = annotation_ends(content, annotation).next()?;
    let rest = content[end..].trim_start();
    let inner = rest.strip_prefix('(')?;

    let mut depth = 1usize;
    for (pos, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&inner[..pos]);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with('*') || line.starts_with("/*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wins_over_everything() {
        let src = "@Entity\npublic enum Status { ACTIVE, INACTIVE }";
        assert_eq!(classify("Status", src).resource_type, ResourceType::Enum);
    }

    #[test]
    fn entity_by_entity_or_table_annotation() {
        assert_eq!(
            classify("Order", "@Entity\npublic class Order {}").resource_type,
            ResourceType::Entity
        );
        assert_eq!(
            classify("Order", "@Table(name = \"orders\")\npublic class Order {}").resource_type,
            ResourceType::Entity
        );
    }

    #[test]
    fn service_controller_repository_annotations() {
        assert_eq!(
            classify("OrderServiceImpl", "@Service\npublic class OrderServiceImpl {}")
                .resource_type,
            ResourceType::Service
        );
        assert_eq!(
            classify("OrderController", "@RestController\nclass OrderController {}")
                .resource_type,
            ResourceType::Controller
        );
        assert_eq!(
            classify("OrderRepository", "@Repository\npublic interface OrderRepository {}")
                .resource_type,
            ResourceType::Repository
        );
    }

    #[test]
    fn controller_advice_is_not_a_controller() {
        let src = "@ControllerAdvice\npublic class Handler {}";
        assert_eq!(classify("Handler", src).resource_type, ResourceType::Unknown);
    }

    #[test]
    fn dto_by_suffix() {
        assert_eq!(
            classify("OrderDTO", "public class OrderDTO {}").resource_type,
            ResourceType::Dto
        );
        assert_eq!(
            classify("OrderDto", "public record OrderDto() {}").resource_type,
            ResourceType::Dto
        );
    }

    #[test]
    fn mapper_sub_kinds() {
        let framework = classify(
            "OrderMapper",
            "@Mapper(componentModel = \"spring\")\npublic interface OrderMapper {}",
        );
        assert_eq!(framework.resource_type, ResourceType::Mapper);
        assert_eq!(framework.mapper_type, MapperType::FrameworkMapper);

        let plain = classify("OrderMapper", "@Mapper\npublic interface OrderMapper {}");
        assert_eq!(plain.mapper_type, MapperType::PlainMapper);
    }

    #[test]
    fn component_model_outside_the_annotation_is_ignored() {
        let src = "@Mapper(uses = DateMapper.class)\npublic interface OrderMapper {\n  \
                   // componentModel left at its default\n  String componentModel();\n}";
        let mapper = classify("OrderMapper", src);
        assert_eq!(mapper.resource_type, ResourceType::Mapper);
        assert_eq!(mapper.mapper_type, MapperType::PlainMapper);
    }

    #[test]
    fn nested_parentheses_stay_inside_the_arguments() {
        let src = "@Mapper(\n  config = Shared.of(\"x\"),\n  componentModel = \"spring\"\n)\ninterface M {}";
        assert_eq!(classify("M", src).mapper_type, MapperType::FrameworkMapper);
    }

    #[test]
    fn plain_interfaces_inferred_from_name() {
        let src = "public interface PaymentService {\n  void pay();\n}";
        assert_eq!(
            classify("PaymentService", src).resource_type,
            ResourceType::Service
        );
        let src = "public interface PaymentRepository extends JpaRepository<Payment, UUID> {}";
        assert_eq!(
            classify("PaymentRepository", src).resource_type,
            ResourceType::Repository
        );
        let src = "public interface Clock {}";
        assert_eq!(classify("Clock", src).resource_type, ResourceType::Unknown);
    }

    #[test]
    fn unknown_for_plain_class() {
        assert_eq!(
            classify("Util", "public class Util {}").resource_type,
            ResourceType::Unknown
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let src = "@Service\npublic class A {}";
        let first = classify("A", src);
        for _ in 0..10 {
            assert_eq!(classify("A", src), first);
        }
    }

    #[test]
    fn merge_key_and_logical_name() {
        assert!(is_implementation("FooServiceImpl"));
        assert!(!is_implementation("Impl"));
        assert_eq!(merge_key("FooServiceImpl"), "FooService");
        assert_eq!(merge_key("FooService"), "FooService");
        assert_eq!(logical_name("FooService", ResourceType::Service), "Foo");
        assert_eq!(logical_name("Service", ResourceType::Service), "Service");
        assert_eq!(logical_name("Order", ResourceType::Entity), "Order");
    }
}
