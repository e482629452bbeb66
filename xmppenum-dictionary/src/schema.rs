/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema definitions for generated enums.
//!
//! This module defines the structures that describe one generated enum type:
//! - [`EnumDefinition`]: Type name, optional namespace and ordered members
//! - [`EnumMember`]: A single member, either a bare wire token or a detailed record
//! - [`MemberDef`]: The detailed member record

use crate::error::{DefinitionError, Result};
use serde::{Deserialize, Serialize};

/// Detailed description of an enum member.
///
/// `name` is the wire-format token written into the member annotation.
/// `member_name` overrides the identifier derived from `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDef {
    /// Wire-format token (kebab-case).
    #[serde(default, alias = "rawName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Explicit identifier for the generated member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
    /// Documentation summary for the generated member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A member of an enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumMember {
    /// A bare kebab-case wire token.
    Token(String),
    /// A member with an explicit identifier and/or documentation.
    Detailed(MemberDef),
}

impl EnumMember {
    /// Creates a member from a wire token.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Creates a member with an explicit identifier and no wire token.
    #[must_use]
    pub fn named(member_name: impl Into<String>) -> Self {
        Self::Detailed(MemberDef {
            member_name: Some(member_name.into()),
            ..MemberDef::default()
        })
    }

    /// Sets the explicit identifier, keeping the wire token.
    #[must_use]
    pub fn with_member_name(self, member_name: impl Into<String>) -> Self {
        let mut def = self.into_detailed();
        def.member_name = Some(member_name.into());
        Self::Detailed(def)
    }

    /// Attaches a documentation summary.
    #[must_use]
    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        let mut def = self.into_detailed();
        def.comment = Some(comment.into());
        Self::Detailed(def)
    }

    /// Returns the wire-format token, if any.
    ///
    /// Empty strings in a detailed member count as absent.
    #[must_use]
    pub fn wire_name(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token),
            Self::Detailed(def) => non_empty(&def.name),
        }
    }

    /// Returns the explicit identifier, if any.
    #[must_use]
    pub fn member_name(&self) -> Option<&str> {
        match self {
            Self::Token(_) => None,
            Self::Detailed(def) => non_empty(&def.member_name),
        }
    }

    /// Returns the documentation summary, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Token(_) => None,
            Self::Detailed(def) => non_empty(&def.comment),
        }
    }

    fn into_detailed(self) -> MemberDef {
        match self {
            Self::Token(token) => MemberDef {
                name: Some(token),
                ..MemberDef::default()
            },
            Self::Detailed(def) => def,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl From<&str> for EnumMember {
    fn from(token: &str) -> Self {
        Self::token(token)
    }
}

impl From<String> for EnumMember {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

/// Definition of one generated enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Enum type name.
    pub name: String,
    /// Dotted namespace the enum is declared in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Members in declaration order.
    pub values: Vec<EnumMember>,
}

impl EnumDefinition {
    /// Creates a new definition without a namespace or members.
    ///
    /// # Arguments
    /// * `name` - The enum type name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            values: Vec::new(),
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Appends one member.
    #[must_use]
    pub fn with_value(mut self, member: impl Into<EnumMember>) -> Self {
        self.values.push(member.into());
        self
    }

    /// Appends members in iteration order.
    #[must_use]
    pub fn with_values<I, M>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<EnumMember>,
    {
        self.values.extend(members.into_iter().map(Into::into));
        self
    }

    /// Returns the namespace, treating an empty string as absent.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// Returns an iterator over the members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &EnumMember> {
        self.values.iter()
    }

    /// Checks that the definition can be rendered.
    ///
    /// Member uniqueness is not checked.
    ///
    /// # Errors
    /// Returns an error if the name is empty, there are no members, or a
    /// member has neither a wire token nor an explicit identifier.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::MissingName);
        }
        if self.values.is_empty() {
            return Err(DefinitionError::EmptyValues {
                name: self.name.clone(),
            });
        }
        for (index, member) in self.values.iter().enumerate() {
            let unnamed = member.wire_name().is_none_or(str::is_empty)
                && member.member_name().is_none_or(str::is_empty);
            if unnamed {
                return Err(DefinitionError::UnnamedMember {
                    enum_name: self.name.clone(),
                    index,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_builder_keeps_order() {
        let def = EnumDefinition::new("Color").with_values(["light-red", "dark-blue", "amber"]);
        let tokens: Vec<_> = def.members().filter_map(EnumMember::wire_name).collect();
        assert_eq!(tokens, vec!["light-red", "dark-blue", "amber"]);
        assert!(def.namespace().is_none());
    }

    #[test]
    fn test_empty_namespace_is_absent() {
        let def = EnumDefinition::new("Color").with_namespace("");
        assert!(def.namespace().is_none());

        let def = EnumDefinition::new("Color").with_namespace("XmppSharp.Protocol");
        assert_eq!(def.namespace(), Some("XmppSharp.Protocol"));
    }

    #[test]
    fn test_member_accessors() {
        let member = EnumMember::token("groupchat").with_member_name("GroupChat");
        assert_eq!(member.wire_name(), Some("groupchat"));
        assert_eq!(member.member_name(), Some("GroupChat"));
        assert_eq!(member.comment(), None);

        let member = EnumMember::named("Available").with_comment("No type attribute.");
        assert_eq!(member.wire_name(), None);
        assert_eq!(member.comment(), Some("No type attribute."));
    }

    #[test]
    fn test_member_deserialize_forms() {
        let members: Vec<EnumMember> = serde_json::from_str(
            r#"["chat", {"name": "groupchat", "memberName": "GroupChat"}, {"memberName": "Available"}]"#,
        )
        .unwrap();

        assert_eq!(members[0], EnumMember::token("chat"));
        assert_eq!(members[1].wire_name(), Some("groupchat"));
        assert_eq!(members[1].member_name(), Some("GroupChat"));
        assert_eq!(members[2].wire_name(), None);
    }

    #[test]
    fn test_raw_name_alias() {
        let member: EnumMember = serde_json::from_str(r#"{"rawName": "jid-multi"}"#).unwrap();
        assert_eq!(member.wire_name(), Some("jid-multi"));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let member: EnumMember =
            serde_json::from_str(r#"{"memberName": "Available", "name": "", "comment": ""}"#)
                .unwrap();
        assert_eq!(member.wire_name(), None);
        assert_eq!(member.comment(), None);
        assert_eq!(member.member_name(), Some("Available"));

        let member: EnumMember =
            serde_json::from_str(r#"{"name": "groupchat", "memberName": ""}"#).unwrap();
        assert_eq!(member.wire_name(), Some("groupchat"));
        assert_eq!(member.member_name(), None);
    }

    // `rawName` is an alias of `name`, so giving both is a duplicate field.
    #[test]
    fn test_name_and_raw_name_together_rejected() {
        let result =
            serde_json::from_str::<MemberDef>(r#"{"name": "jid-multi", "rawName": "jid-multi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        let def = EnumDefinition::new("Color").with_value("red");
        assert!(def.validate().is_ok());

        let def = EnumDefinition::new("  ").with_value("red");
        assert!(matches!(def.validate(), Err(DefinitionError::MissingName)));

        let def = EnumDefinition::new("Color");
        assert!(matches!(
            def.validate(),
            Err(DefinitionError::EmptyValues { .. })
        ));

        let def = EnumDefinition::new("Color")
            .with_value("red")
            .with_value(EnumMember::Detailed(MemberDef::default()));
        assert!(matches!(
            def.validate(),
            Err(DefinitionError::UnnamedMember { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_allows_duplicates() {
        let def = EnumDefinition::new("Color").with_values(["red", "red"]);
        assert!(def.validate().is_ok());
    }
}
