//! React function components from block descriptors.
//!
//! Output layout for a block `my-block` with a `theme` modifier and an
//! `icon` element:
//!
//! ```text
//! import React from 'react';
//! import './css/my-block.post.css';
//!
//! const MyBlock = (props) => {
//!   let className = ...;
//!   switch (props['theme']) { ... }
//!   return (<div className={className}>{props.children}</div>);
//! };
//!
//! MyBlock.Icon = (props) => { ... };
//!
//! export default MyBlock;
//! ```

use indexmap::IndexMap;
use serde::Serialize;

use super::templates::TemplateEngine;
use super::ComponentEmitter;
use crate::error::Result;
use crate::model::{Descriptor, Props, StyleRef};

const COMPONENT: &str = "component";
const MODIFIER: &str = "modifier";
const ELEMENT: &str = "element";

const COMPONENT_TEMPLATE: &str = r#"import React from 'react';
{{#if css_path}}import '{{js_string css_path}}';{{/if}}

/**
 * {{name}} component.
 *
 * @param {Object} props Component properties
 * @returns {React.ReactElement}
 */
const {{name}} = (props) => {
  {{#if mods}}let{{else}}const{{/if}} className = props.className ? '{{js_string class_name}} ' + props.className : '{{js_string class_name}}';
{{mods}}
  return (
    <div className={className}>
      {props.children}
    </div>
  );
};
{{elems}}
export default {{name}};
"#;

const MODIFIER_TEMPLATE: &str = r#"  switch (props['{{js_string name}}']) {
{{#each values}}    case '{{js_string value}}': {
      require('{{js_string css_path}}');
      className += ' {{js_string class_name}}';
      break;
    }
{{/each}}    default:
      break;
  }
"#;

const ELEMENT_TEMPLATE: &str = r#"{{owner}}.{{name}} = (props) => {
{{#if css_path}}  require('{{js_string css_path}}');
{{/if}}  {{#if mods}}let{{else}}const{{/if}} className = props.className ? '{{js_string class_name}} ' + props.className : '{{js_string class_name}}';
{{mods}}
  return (
    <div className={className}>
      {props.children}
    </div>
  );
};"#;

#[derive(Serialize)]
struct ComponentView<'d> {
    name: &'d str,
    class_name: &'d str,
    css_path: Option<&'d str>,
    mods: String,
    elems: String,
}

#[derive(Serialize)]
struct ModifierView<'d> {
    name: &'d str,
    values: Vec<ValueView<'d>>,
}

#[derive(Serialize)]
struct ValueView<'d> {
    value: &'d str,
    class_name: &'d str,
    css_path: &'d str,
}

#[derive(Serialize)]
struct ElementView<'d> {
    owner: &'d str,
    name: &'d str,
    class_name: &'d str,
    css_path: Option<&'d str>,
    mods: String,
}

/// React (JSX) emitter.
///
/// Template data is passed as ordered lists, so emission order is exactly the
/// insertion order of `props` and `children`.
pub struct ReactEmitter<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ReactEmitter<'a> {
    /// Create an emitter with the three component templates registered.
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(COMPONENT, COMPONENT_TEMPLATE)?;
        engine.register_template(MODIFIER, MODIFIER_TEMPLATE)?;
        engine.register_template(ELEMENT, ELEMENT_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// One `switch` per modifier, in insertion order.
    fn generate_mods_part(&self, props: &Props) -> Result<String> {
        let mut part = String::new();
        for (name, values) in props {
            let view = ModifierView {
                name,
                values: Self::value_views(values),
            };
            part.push('\n');
            part.push_str(&self.engine.render(MODIFIER, &view)?);
        }
        Ok(part)
    }

    fn value_views(values: &IndexMap<String, StyleRef>) -> Vec<ValueView<'_>> {
        values
            .iter()
            .map(|(value, style)| ValueView {
                value,
                class_name: &style.class_name,
                css_path: &style.css_path,
            })
            .collect()
    }

    /// One sub-component per element, attached to `owner`.
    fn generate_elems_part(
        &self,
        owner: &str,
        children: &IndexMap<String, Descriptor>,
    ) -> Result<String> {
        let mut part = String::new();
        for child in children.values() {
            let view = ElementView {
                owner,
                name: &child.name,
                class_name: &child.class_name,
                css_path: child.css_path.as_deref(),
                mods: self.generate_mods_part(&child.props)?,
            };
            part.push('\n');
            part.push_str(&self.engine.render(ELEMENT, &view)?);
            part.push('\n');
        }
        Ok(part)
    }
}

impl<'a> ComponentEmitter for ReactEmitter<'a> {
    fn framework_name(&self) -> &'static str {
        "React"
    }

    fn emit(&self, descriptor: &Descriptor) -> Result<String> {
        let view = ComponentView {
            name: &descriptor.name,
            class_name: &descriptor.class_name,
            css_path: descriptor.css_path.as_deref(),
            mods: self.generate_mods_part(&descriptor.props)?,
            elems: self.generate_elems_part(&descriptor.name, &descriptor.children)?,
        };
        self.engine.render(COMPONENT, &view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scenario() -> Descriptor {
        let mut block = Descriptor::new("MyBlock", "my-block");
        block.css_path = Some("./css/my-block.post.css".into());
        block.set_prop(
            "theme",
            "red",
            StyleRef::new("my-block_theme_red", "./css/my-block_theme_red.post.css"),
        );

        let mut icon = Descriptor::new("Icon", "my-block__icon");
        icon.css_path = Some("./css/__icon/my-block__icon.post.css".into());
        icon.set_prop(
            "size",
            "big",
            StyleRef::new(
                "my-block__icon_size_big",
                "./css/__icon/my-block__icon_size_big.post.css",
            ),
        );
        block.children.insert("icon".into(), icon);
        block
    }

    fn position(code: &str, needle: &str) -> usize {
        code.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in:\n{code}"))
    }

    #[test]
    fn test_emit_block_component() {
        let code = ReactEmitter::new().unwrap().emit(&scenario()).unwrap();

        assert!(code.starts_with(
            "import React from 'react';\nimport './css/my-block.post.css';\n"
        ));
        assert!(code.contains("const MyBlock = (props) => {"));
        assert!(code.contains(
            "let className = props.className ? 'my-block ' + props.className : 'my-block';"
        ));
        assert!(code.contains("switch (props['theme']) {"));
        assert!(code.contains("case 'red': {"));
        assert!(code.contains("require('./css/my-block_theme_red.post.css');"));
        assert!(code.contains("className += ' my-block_theme_red';"));
        assert!(code.ends_with("export default MyBlock;\n"));
    }

    #[test]
    fn test_emit_element_component() {
        let code = ReactEmitter::new().unwrap().emit(&scenario()).unwrap();

        assert!(code.contains(
            "MyBlock.Icon = (props) => {\n  require('./css/__icon/my-block__icon.post.css');\n"
        ));
        assert!(code.contains("switch (props['size']) {"));
        assert!(code.contains("className += ' my-block__icon_size_big';"));
        assert!(position(&code, "MyBlock.Icon =") < position(&code, "export default MyBlock;"));
    }

    #[test]
    fn test_no_stylesheet_reference_without_css_path() {
        let mut block = Descriptor::new("Plain", "plain");
        block.children.insert("icon".into(), Descriptor::new("Icon", "plain__icon"));

        let code = ReactEmitter::new().unwrap().emit(&block).unwrap();
        assert!(!code.contains("import './"));
        assert!(!code.contains("require("));
        assert!(!code.contains("switch"));
        assert!(code.contains(
            "const className = props.className ? 'plain ' + props.className : 'plain';"
        ));
        assert!(code.contains("Plain.Icon = (props) => {\n  const className"));
    }

    #[test]
    fn test_emission_follows_insertion_order() {
        let mut block = Descriptor::new("Button", "button");
        let style = |class: &str| StyleRef::new(class, format!("./css/{}.post.css", class));
        block.set_prop("view", "flat", style("button_view_flat"));
        block.set_prop("size", "s", style("button_size_s"));
        block.set_prop("view", "action", style("button_view_action"));
        block.children.insert("text".into(), Descriptor::new("Text", "button__text"));
        block.children.insert("icon".into(), Descriptor::new("Icon", "button__icon"));

        let code = ReactEmitter::new().unwrap().emit(&block).unwrap();

        assert!(position(&code, "props['view']") < position(&code, "props['size']"));
        assert!(position(&code, "case 'flat'") < position(&code, "case 'action'"));
        assert!(position(&code, "Button.Text =") < position(&code, "Button.Icon ="));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let emitter = ReactEmitter::new().unwrap();
        let first = emitter.emit(&scenario()).unwrap();
        let second = ReactEmitter::new().unwrap().emit(&scenario()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_branch_present() {
        let code = ReactEmitter::new().unwrap().emit(&scenario()).unwrap();
        assert_eq!(code.matches("default:\n      break;").count(), 2);
    }
}
