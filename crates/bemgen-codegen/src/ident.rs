//! Conversion of BEM names into component names.

use convert_case::{Case, Casing};

/// Convert a BEM block or element name into a component name.
///
/// `my-block` becomes `MyBlock`. Total over any input; never applied to
/// class names or paths.
pub fn to_component_name(identifier: &str) -> String {
    identifier.to_case(Case::Pascal)
}
