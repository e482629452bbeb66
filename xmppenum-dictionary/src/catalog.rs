/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Built-in enum definitions.

use crate::schema::EnumDefinition;

/// Namespace of the stream-level protocol types.
pub const BASE_NAMESPACE: &str = "XmppSharp.Protocol.Base";

/// Defined stream error conditions (RFC 6120, section 4.9.3).
pub const STREAM_ERROR_CONDITIONS: &[&str] = &[
    "bad-format",
    "bad-namespace-prefix",
    "conflict",
    "connection-timeout",
    "host-gone",
    "host-unknown",
    "improper-addressing",
    "internal-server-error",
    "invalid-from",
    "invalid-namespace",
    "invalid-xml",
    "not-authorized",
    "not-well-formed",
    "policy-violation",
    "remote-connection-failed",
    "reset",
    "resource-constraint",
    "restricted-xml",
    "see-other-host",
    "system-shutdown",
    "undefined-condition",
    "unsupported-encoding",
    "unsupported-feature",
    "unsupported-stanza-type",
    "unsupported-version",
];

/// Returns the `StreamErrorCondition` definition.
#[must_use]
pub fn stream_error_condition() -> EnumDefinition {
    EnumDefinition::new("StreamErrorCondition")
        .with_namespace(BASE_NAMESPACE)
        .with_values(STREAM_ERROR_CONDITIONS.iter().copied())
}

/// Returns the definitions generated when no input is given.
#[must_use]
pub fn builtin_definitions() -> Vec<EnumDefinition> {
    vec![stream_error_condition()]
}
