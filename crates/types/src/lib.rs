pub mod fragment;
pub mod ids;
pub mod lexical;
pub mod position;

pub use fragment::{BlockAnchor, Fragment, FragmentKind, SourceSpan};
pub use ids::PlaceholderId;
pub use lexical::{is_ident_byte, is_ident_start};
pub use position::{LineIndex, Position};
