//! Template renderer
//!
//! Turns a `ClassSpec` into source text in two steps:
//!
//! 1. `build` maps the class spec onto a small declaration tree
//!    (`CompilationUnit` -> `ClassDecl` -> `PropertyDecl` -> `Attribute`).
//! 2. `CompilationUnit::emit` walks the tree through a `SourceWriter`, which
//!    owns indentation and line breaks.
//!
//! Rendering is pure: the same spec and style always give byte-identical text.

use crate::domain::entities::{ArgumentSpec, ClassSpec};
use crate::domain::value_objects::{description_key, display_name_key};

const CATEGORY_ATTRIBUTE: &str = "LocalizedCategory";
const DISPLAY_NAME_ATTRIBUTE: &str = "LocalizedDisplayName";
const DESCRIPTION_ATTRIBUTE: &str = "LocalizedDescription";
const RESOURCES_CLASS: &str = "Resources";
const RUNTIME_IMPORT: &str = "System.Activities";

/// Naming and layout knobs of the generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// Leading namespace segment (`UiPath`)
    pub root_namespace: String,
    /// Trailing namespace segment (`Activities`)
    pub namespace_suffix: String,
    /// Type parameter of every argument container (`string`)
    pub scalar_type: String,
    /// One level of indentation
    pub indent: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            root_namespace: "UiPath".to_string(),
            namespace_suffix: "Activities".to_string(),
            scalar_type: "string".to_string(),
            indent: "    ".to_string(),
        }
    }
}

impl RenderStyle {
    /// Fully qualified namespace for a pack, skipping empty segments
    pub fn namespace_for(&self, namespace_name: &str) -> String {
        [
            self.root_namespace.as_str(),
            namespace_name,
            self.namespace_suffix.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
    }
}

/// A localization annotation: `[Name(nameof(Resources.Key))]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub resource_key: String,
}

impl Attribute {
    fn new(name: &'static str, resource_key: impl Into<String>) -> Self {
        Self {
            name,
            resource_key: resource_key.into(),
        }
    }

    fn emit(&self, w: &mut SourceWriter<'_>) {
        w.line(&format!(
            "[{}(nameof({}.{}))]",
            self.name, RESOURCES_CLASS, self.resource_key
        ));
    }
}

/// One auto-property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub attributes: Vec<Attribute>,
    pub type_name: String,
    pub name: String,
}

impl PropertyDecl {
    fn emit(&self, w: &mut SourceWriter<'_>) {
        for attribute in &self.attributes {
            attribute.emit(w);
        }
        w.line(&format!(
            "public {} {} {{ get; set; }}",
            self.type_name, self.name
        ));
    }
}

/// The generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub properties: Vec<PropertyDecl>,
}

impl ClassDecl {
    fn emit(&self, w: &mut SourceWriter<'_>) {
        for attribute in &self.attributes {
            attribute.emit(w);
        }
        w.line(&format!("public class {}", self.name));
        w.open();
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            property.emit(w);
        }
        w.close();
    }
}

/// A whole generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub imports: Vec<String>,
    pub namespace: String,
    pub class: ClassDecl,
}

impl CompilationUnit {
    /// Emit the tree as text
    pub fn emit(&self, indent: &str) -> String {
        let mut w = SourceWriter::new(indent);
        for import in &self.imports {
            w.line(&format!("using {};", import));
        }
        w.blank();
        w.line(&format!("namespace {}", self.namespace));
        w.open();
        self.class.emit(&mut w);
        w.close();
        w.finish()
    }
}

/// Line-oriented writer that tracks brace depth
struct SourceWriter<'a> {
    indent: &'a str,
    depth: usize,
    out: String,
}

impl<'a> SourceWriter<'a> {
    fn new(indent: &'a str) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(self.indent);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Renders class specs with a fixed style
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    style: RenderStyle,
}

impl TemplateRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Render `spec` to source text
    pub fn render(&self, spec: &ClassSpec) -> String {
        self.build(spec).emit(&self.style.indent)
    }

    /// Build the declaration tree for `spec`
    pub fn build(&self, spec: &ClassSpec) -> CompilationUnit {
        let namespace = self.style.namespace_for(spec.namespace_name());

        CompilationUnit {
            imports: vec![
                RUNTIME_IMPORT.to_string(),
                format!("{}.Properties", namespace),
            ],
            namespace,
            class: ClassDecl {
                attributes: vec![
                    Attribute::new(DISPLAY_NAME_ATTRIBUTE, display_name_key(spec.class_name())),
                    Attribute::new(DESCRIPTION_ATTRIBUTE, description_key(spec.class_name())),
                ],
                name: spec.class_name().to_string(),
                properties: spec
                    .arguments()
                    .iter()
                    .map(|arg| self.property(arg))
                    .collect(),
            },
        }
    }

    fn property(&self, argument: &ArgumentSpec) -> PropertyDecl {
        let direction = argument.direction();
        let name = argument.identifier();

        PropertyDecl {
            attributes: vec![
                Attribute::new(CATEGORY_ATTRIBUTE, direction.category_key()),
                Attribute::new(DISPLAY_NAME_ATTRIBUTE, display_name_key(name)),
                Attribute::new(DESCRIPTION_ATTRIBUTE, description_key(name)),
            ],
            type_name: format!("{}<{}>", direction.container_type(), self.style.scalar_type),
            name: name.to_string(),
        }
    }
}

/// File name of the generated source: `<className>.<extension>`
pub fn output_file_name(spec: &ClassSpec, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        spec.class_name().to_string()
    } else {
        format!("{}.{}", spec.class_name(), extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Direction;

    fn echo() -> ClassSpec {
        ClassSpec::from_groups("Pack", "Echo", ["Text"], ["Result"])
    }

    #[test]
    fn renders_echo_activity() {
        let text = TemplateRenderer::default().render(&echo());

        insta::assert_snapshot!(text, @r###"
using System.Activities;
using UiPath.Pack.Activities.Properties;

namespace UiPath.Pack.Activities
{
    [LocalizedDisplayName(nameof(Resources.EchoDisplayName))]
    [LocalizedDescription(nameof(Resources.EchoDescription))]
    public class Echo
    {
        [LocalizedCategory(nameof(Resources.Input))]
        [LocalizedDisplayName(nameof(Resources.TextDisplayName))]
        [LocalizedDescription(nameof(Resources.TextDescription))]
        public InArgument<string> Text { get; set; }

        [LocalizedCategory(nameof(Resources.Output))]
        [LocalizedDisplayName(nameof(Resources.ResultDisplayName))]
        [LocalizedDescription(nameof(Resources.ResultDescription))]
        public OutArgument<string> Result { get; set; }
    }
}
"###);
    }

    #[test]
    fn renders_class_without_arguments() {
        let spec = ClassSpec::new("Pack", "Empty", Vec::new());
        let text = TemplateRenderer::default().render(&spec);

        assert!(text.contains("public class Empty\n    {\n    }\n"));
        assert!(!text.contains("LocalizedCategory"));
        assert!(!text.contains("Argument<"));
        assert_eq!(text.matches("[Localized").count(), 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = TemplateRenderer::default();
        assert_eq!(renderer.render(&echo()), renderer.render(&echo()));
    }

    #[test]
    fn properties_follow_argument_order() {
        let spec = ClassSpec::from_groups("Pack", "Multi", ["B", "A"], ["C"]);
        let unit = TemplateRenderer::default().build(&spec);

        let names: Vec<_> = unit.class.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn direction_only_changes_tag_and_category() {
        let renderer = TemplateRenderer::default();
        let input = renderer.property(&ArgumentSpec::new("X", Direction::In));
        let output = renderer.property(&ArgumentSpec::new("X", Direction::Out));

        assert_eq!(input.type_name, "InArgument<string>");
        assert_eq!(output.type_name, "OutArgument<string>");
        assert_eq!(input.attributes[0].resource_key, "Input");
        assert_eq!(output.attributes[0].resource_key, "Output");
        assert_eq!(input.attributes[1..], output.attributes[1..]);
    }

    #[test]
    fn custom_style_is_applied() {
        let style = RenderStyle {
            root_namespace: String::new(),
            namespace_suffix: "Workflows".to_string(),
            scalar_type: "object".to_string(),
            indent: "\t".to_string(),
        };
        let text = TemplateRenderer::new(style).render(&echo());

        assert!(text.contains("namespace Pack.Workflows\n"));
        assert!(text.contains("using Pack.Workflows.Properties;\n"));
        assert!(text.contains("\t\tpublic InArgument<object> Text { get; set; }\n"));
    }

    #[test]
    fn namespace_skips_empty_segments() {
        let style = RenderStyle {
            root_namespace: String::new(),
            namespace_suffix: String::new(),
            ..RenderStyle::default()
        };
        assert_eq!(style.namespace_for("Pack"), "Pack");
        assert_eq!(RenderStyle::default().namespace_for("Pack"), "UiPath.Pack.Activities");
    }

    #[test]
    fn output_file_name_uses_extension() {
        assert_eq!(output_file_name(&echo(), "cs"), "Echo.cs");
        assert_eq!(output_file_name(&echo(), ".cs"), "Echo.cs");
        assert_eq!(output_file_name(&echo(), ""), "Echo");
    }
}
