/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Code generator for XMPP enum definitions.
//!
//! Generates C# enum declarations from [`EnumDefinition`]s. Every enum is
//! tagged with the enum attribute and a `GeneratedCode` marker, and every
//! member carries its wire token in a member attribute so the generated
//! identifier can be mapped back to the protocol string.

use crate::naming::member_identifier;
use crate::writer::{DEFAULT_INDENT, DEFAULT_LINE_TERMINATOR, IndentedBuffer};
use tracing::debug;
use xmppenum_dictionary::{EnumDefinition, EnumMember};

/// How namespaces are declared in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamespaceStyle {
    /// `namespace X { ... }` with the body indented one level.
    #[default]
    Block,
    /// `namespace X;` applying to the rest of the file.
    FileScoped,
}

/// Configuration for code generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespaces imported with `using` at the top of the file.
    pub imports: Vec<String>,
    /// Namespace declaration style.
    pub namespace_style: NamespaceStyle,
    /// Attribute marking the enum type.
    pub enum_attribute: String,
    /// Attribute carrying each member's wire token.
    pub member_attribute: String,
    /// Tool name recorded in the `GeneratedCode` attribute.
    pub tool_name: String,
    /// Tool version recorded in the `GeneratedCode` attribute.
    pub tool_version: String,
    /// Text emitted once per nesting level.
    pub indent_unit: String,
    /// Line terminator.
    pub line_terminator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            imports: vec![
                "System.CodeDom.Compiler".to_string(),
                "XmppSharp.Attributes".to_string(),
            ],
            namespace_style: NamespaceStyle::Block,
            enum_attribute: "XmppEnum".to_string(),
            member_attribute: "XmppEnumMember".to_string(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            indent_unit: DEFAULT_INDENT.to_string(),
            line_terminator: DEFAULT_LINE_TERMINATOR.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Replaces the `using` imports.
    #[must_use]
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the namespace declaration style.
    #[must_use]
    pub const fn with_namespace_style(mut self, style: NamespaceStyle) -> Self {
        self.namespace_style = style;
        self
    }

    /// Sets the enum and member attribute names.
    #[must_use]
    pub fn with_attributes(
        mut self,
        enum_attribute: impl Into<String>,
        member_attribute: impl Into<String>,
    ) -> Self {
        self.enum_attribute = enum_attribute.into();
        self.member_attribute = member_attribute.into();
        self
    }

    /// Sets the tool recorded in the `GeneratedCode` attribute.
    #[must_use]
    pub fn with_tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self.tool_version = version.into();
        self
    }

    /// Sets the indent unit and line terminator.
    #[must_use]
    pub fn with_style(
        mut self,
        indent_unit: impl Into<String>,
        line_terminator: impl Into<String>,
    ) -> Self {
        self.indent_unit = indent_unit.into();
        self.line_terminator = line_terminator.into();
        self
    }
}

/// Code generator for enum definitions.
#[derive(Debug, Default)]
pub struct EnumGenerator {
    config: GeneratorConfig,
}

impl EnumGenerator {
    /// Creates a new code generator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Creates a new code generator with the specified configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates C# source for a sequence of definitions.
    ///
    /// Definitions and their members are emitted in the given order.
    ///
    /// # Arguments
    /// * `definitions` - The enums to generate
    ///
    /// # Returns
    /// The generated source text.
    #[must_use]
    pub fn generate(&self, definitions: &[EnumDefinition]) -> String {
        let mut out =
            IndentedBuffer::with_style(&*self.config.indent_unit, &*self.config.line_terminator);

        self.write_imports(&mut out);
        for definition in definitions {
            self.write_enum(&mut out, definition);
        }

        out.into_string()
    }

    /// Generates C# source for a single definition, imports included.
    #[must_use]
    pub fn generate_one(&self, definition: &EnumDefinition) -> String {
        self.generate(std::slice::from_ref(definition))
    }

    fn write_imports(&self, out: &mut IndentedBuffer) {
        if self.config.imports.is_empty() {
            return;
        }

        for import in &self.config.imports {
            out.writeln(&format!("using {import};"));
        }
        out.writeln("");
    }

    fn write_enum(&self, out: &mut IndentedBuffer, definition: &EnumDefinition) {
        debug!(
            "Rendering enum {} ({} members)",
            definition.name,
            definition.values.len()
        );

        let namespace = definition.namespace();
        if let Some(ns) = namespace {
            match self.config.namespace_style {
                NamespaceStyle::Block => {
                    out.writeln(&format!("namespace {ns}"));
                    out.writeln("{");
                    out.indent();
                }
                NamespaceStyle::FileScoped => {
                    out.writeln(&format!("namespace {ns};"));
                    out.writeln("");
                }
            }
        }

        out.writeln(&format!(
            "[{}, GeneratedCode(\"{}\",\"{}\")]",
            self.config.enum_attribute, self.config.tool_name, self.config.tool_version
        ));
        out.writeln(&format!("public enum {}", definition.name));
        out.writeln("{");
        out.indent();

        for member in definition.members() {
            self.write_member(out, member);
        }

        out.unindent();
        out.writeln("}");

        if namespace.is_some() && self.config.namespace_style == NamespaceStyle::Block {
            out.unindent();
            out.writeln("}");
        }

        out.writeln("");
    }

    fn write_member(&self, out: &mut IndentedBuffer, member: &EnumMember) {
        if let Some(comment) = member.comment() {
            out.writeln("/// <summary>");
            out.writeln(&format!("/// {comment}"));
            out.writeln("/// </summary>");
        }

        if let Some(wire_name) = member.wire_name() {
            out.writeln(&format!(
                "[{}(\"{}\")]",
                self.config.member_attribute, wire_name
            ));
        }

        out.writeln(&format!("{},", member_identifier(member)));
        out.writeln("");
    }
}
