//! Data models for code generation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Modifier name -> modifier value -> stylesheet.
///
/// Insertion order is the order files were discovered in, and is the order
/// modifiers and their values are emitted in.
pub type Props = IndexMap<String, IndexMap<String, StyleRef>>;

/// A BEM class name paired with its stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRef {
    pub class_name: String,
    /// Relative to the component directory, e.g. `./css/button_size_l.post.css`.
    pub css_path: String,
}

impl StyleRef {
    pub fn new(class_name: impl Into<String>, css_path: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            css_path: css_path.into(),
        }
    }
}

/// Model of one block or element, ready for emission.
///
/// Blocks may have `children`; elements never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Component name, e.g. `MyBlock`.
    pub name: String,
    /// Class applied to the rendered root element.
    pub class_name: String,
    /// Root stylesheet, absent when the block or element has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_path: Option<String>,
    #[serde(default)]
    pub props: Props,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, Descriptor>,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            css_path: None,
            props: Props::new(),
            children: IndexMap::new(),
        }
    }

    /// Set the stylesheet for `(modifier, value)`, replacing any previous one.
    ///
    /// A replaced entry keeps its original position.
    pub fn set_prop(&mut self, modifier: &str, value: &str, style: StyleRef) {
        self.props
            .entry(modifier.to_string())
            .or_default()
            .insert(value.to_string(), style);
    }

    /// Look up the stylesheet for `(modifier, value)`.
    pub fn prop(&self, modifier: &str, value: &str) -> Option<&StyleRef> {
        self.props.get(modifier).and_then(|values| values.get(value))
    }

    /// Total number of modifier values on this descriptor.
    pub fn modifier_count(&self) -> usize {
        self.props.values().map(IndexMap::len).sum()
    }
}

/// A discovered stylesheet file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Location on disk, used in error messages.
    pub path: PathBuf,
    /// Path relative to the component directory, `./`-prefixed and `/`-separated.
    pub css_path: String,
}

impl SourceFile {
    /// Describe `path`, found beneath `component_dir`.
    ///
    /// Paths outside `component_dir` keep their full form.
    pub fn relative_to(component_dir: &Path, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let relative = path.strip_prefix(component_dir).unwrap_or(&path);
        let parts: Vec<_> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let css_path = format!("./{}", parts.join("/"));
        Self { path, css_path }
    }

    /// File name without directories.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_prop_last_write_wins_in_place() {
        let mut d = Descriptor::new("Button", "button");
        d.set_prop("size", "s", StyleRef::new("button_size_s", "./css/a.post.css"));
        d.set_prop("size", "l", StyleRef::new("button_size_l", "./css/b.post.css"));
        d.set_prop("size", "s", StyleRef::new("button_size_s", "./css/c.post.css"));

        let values: Vec<_> = d.props["size"].keys().cloned().collect();
        assert_eq!(values, vec!["s", "l"]);
        assert_eq!(d.prop("size", "s").unwrap().css_path, "./css/c.post.css");
        assert_eq!(d.modifier_count(), 2);
    }

    #[test]
    fn test_source_file_relative_path() {
        let dir = Path::new("/out/Button");
        let file = SourceFile::relative_to(dir, "/out/Button/css/__icon/button__icon.post.css");
        assert_eq!(file.css_path, "./css/__icon/button__icon.post.css");
        assert_eq!(file.file_name(), "button__icon.post.css");
    }
}
