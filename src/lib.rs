//! paramdoc — find parameters missing from a function's documentation block
//! and insert the missing `@param` entries in declaration order.
//!
//! Destructured parameters are documented as a root entry followed by one
//! dotted entry per field (`opts`, `opts.verbose`). Aggregates without a
//! name of their own get one from the documentation block or a generated
//! one (`root0`, `root1`, ...).
//!
//! ```
//! use paramdoc::{Config, DocEntry, ParameterShape, RequireParam};
//!
//! let rule = RequireParam::new(&Config::default());
//! let params = [
//!     ParameterShape::simple("a"),
//!     ParameterShape::structured(None, ["b", "c"]),
//! ];
//! let mut tags = vec![DocEntry::new("param", "a")];
//!
//! let diagnostics = rule.check(&params, &tags);
//! assert_eq!(diagnostics.len(), 3);
//!
//! diagnostics[0].fix.as_ref().unwrap().apply(&mut tags);
//! let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
//! assert_eq!(names, ["a", "root0", "root0.b", "root0.c"]);
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod fix;
pub mod index;
pub mod input;
pub mod model;
pub mod namer;
pub mod render;
pub mod report;
pub mod rule;

pub use config::{Config, Options};
pub use error::{Error, Result};
pub use model::{Destructured, DocEntry, FunctionDoc, ParameterShape, SourceDocument};
pub use report::{Diagnostic, Fix};
pub use rule::RequireParam;
