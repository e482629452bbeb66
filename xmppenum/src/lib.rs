/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Xmppenum
//!
//! Generates the string-tagged protocol enums of the XmppSharp library.
//!
//! Each enum is described by an [`EnumDefinition`](dictionary::EnumDefinition):
//! a type name, an optional namespace and an ordered list of kebab-case wire
//! tokens. The generator renders them as C# enums whose members carry their
//! wire token in an attribute, and writes the result to a `.g.cs` file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xmppenum::prelude::*;
//!
//! let generator = EnumGenerator::new();
//! let written = write_output(
//!     &generator,
//!     &builtin_definitions(),
//!     &OutputLayout::default(),
//! )?;
//! # Ok::<(), xmppenum::GenerateError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`dictionary`]: Enum definitions, the built-in catalog and JSON loading
//! - [`codegen`]: Naming conversion, the indented buffer and the enum emitter
//! - [`output`]: Writing generated sources to disk

pub mod error;
pub mod output;

pub use error::{GenerateError, Result};
pub use output::{DEFAULT_OUTPUT, OutputLayout, write_file, write_output};

pub mod dictionary {
    //! Enum definitions, the built-in catalog and JSON loading.
    pub use xmppenum_dictionary::*;
}

pub mod codegen {
    //! Naming conversion, the indented buffer and the enum emitter.
    pub use xmppenum_codegen::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Definitions
    pub use xmppenum_dictionary::{
        DefinitionError, EnumDefinition, EnumMember, builtin_definitions, load_path,
        stream_error_condition,
    };

    // Generation
    pub use xmppenum_codegen::{
        EnumGenerator, GeneratorConfig, IndentedBuffer, NamespaceStyle, kebab_to_pascal,
    };

    // Output
    pub use crate::error::GenerateError;
    pub use crate::output::{OutputLayout, write_output};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let _buf = IndentedBuffer::new();
        let _layout = OutputLayout::default();
        assert_eq!(kebab_to_pascal("host-unknown"), "HostUnknown");
    }

    #[test]
    fn test_builtin_render() {
        let code = EnumGenerator::new().generate(&builtin_definitions());
        assert!(code.starts_with("using System.CodeDom.Compiler;\n"));
        assert!(code.contains("namespace XmppSharp.Protocol.Base\n{\n"));
        assert!(code.contains("    [XmppEnumMember(\"see-other-host\")]\n    SeeOtherHost,\n"));
    }
}
