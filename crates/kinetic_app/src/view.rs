//! View tree
//!
//! Screens render into a tree of plain data nodes. A renderer (or a test)
//! walks the tree; nothing here draws. Containers carry the sampled motion
//! transform of the component that produced them, relative to their parent.

use crate::icon::Icon;
use kinetic_animation::MotionFrame;
use kinetic_core::Color;
use kinetic_theme::{BoxStyle, TextStyle};
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Container(Container),
    Text(TextView),
    Icon(Icon),
    Switch(SwitchView),
    /// Fixed-width gap in a row
    Spacer(f32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    /// Interactive elements are addressed by key
    pub key: Option<String>,
    pub style: BoxStyle,
    pub motion: MotionFrame,
    pub children: Vec<View>,
}

impl Container {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn motion(mut self, frame: MotionFrame) -> Self {
        self.motion = frame;
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, V>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<View>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextView {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchView {
    pub key: String,
    pub value: bool,
    pub track: Color,
    pub thumb: Color,
}

/// Start a container
pub fn div(style: BoxStyle) -> Container {
    Container {
        style,
        ..Default::default()
    }
}

pub fn text(content: impl Into<String>, style: TextStyle) -> TextView {
    TextView {
        content: content.into(),
        style,
    }
}

impl From<Container> for View {
    fn from(c: Container) -> Self {
        View::Container(c)
    }
}

impl From<TextView> for View {
    fn from(t: TextView) -> Self {
        View::Text(t)
    }
}

impl From<Icon> for View {
    fn from(i: Icon) -> Self {
        View::Icon(i)
    }
}

impl From<SwitchView> for View {
    fn from(s: SwitchView) -> Self {
        View::Switch(s)
    }
}

impl View {
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            View::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Depth-first search for the container with `key`
    pub fn find(&self, key: &str) -> Option<&Container> {
        let container = self.as_container()?;
        if container.key.as_deref() == Some(key) {
            return Some(container);
        }
        container.children.iter().find_map(|child| child.find(key))
    }

    pub fn find_switch(&self, key: &str) -> Option<&SwitchView> {
        match self {
            View::Switch(s) if s.key == key => Some(s),
            View::Container(c) => c.children.iter().find_map(|child| child.find_switch(key)),
            _ => None,
        }
    }

    /// All text content in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            View::Text(t) => out.push(&t.content),
            View::Container(c) => c.children.iter().for_each(|child| child.collect_texts(out)),
            _ => {}
        }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }

    /// Keys of every keyed container in document order
    pub fn keys(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_keys(&mut out);
        out
    }

    fn collect_keys<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let View::Container(c) = self {
            if let Some(key) = c.key.as_deref() {
                out.push(key);
            }
            c.children.iter().for_each(|child| child.collect_keys(out));
        }
    }

    /// Indented one-node-per-line dump
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            View::Container(c) => {
                let _ = write!(out, "{indent}{:?}", c.style.layout);
                if let Some(key) = &c.key {
                    let _ = write!(out, " #{key}");
                }
                if !c.motion.is_rest() {
                    let m = c.motion;
                    let _ = write!(
                        out,
                        " [x={:.1} y={:.1} scale={:.2} opacity={:.2}]",
                        m.translate_x, m.translate_y, m.scale, m.opacity
                    );
                }
                out.push('\n');
                for child in &c.children {
                    child.write_outline(out, depth + 1);
                }
            }
            View::Text(t) => {
                let _ = writeln!(out, "{indent}{:?}", t.content);
            }
            View::Icon(i) => {
                let _ = writeln!(out, "{indent}icon {} {}px", i.name, i.size);
            }
            View::Switch(s) => {
                let state = if s.value { "on" } else { "off" };
                let _ = writeln!(out, "{indent}switch #{} {state}", s.key);
            }
            View::Spacer(width) => {
                let _ = writeln!(out, "{indent}spacer {width}px");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconName;
    use kinetic_theme::{Layout, Theme};

    fn sample() -> View {
        let theme = Theme::midnight();
        let styles = theme.styles();
        div(styles.screen())
            .child(
                div(styles.card())
                    .key("card:0")
                    .motion(MotionFrame {
                        opacity: 0.5,
                        ..MotionFrame::REST
                    })
                    .child(text("Hello", styles.title()))
                    .child(Icon::new(IconName::Heart, 20.0, theme.colors.text)),
            )
            .child(SwitchView {
                key: "switch:dark_mode".into(),
                value: true,
                track: theme.colors.primary,
                thumb: theme.colors.text,
            })
            .into()
    }

    #[test]
    fn test_find_by_key() {
        let view = sample();
        let card = view.find("card:0").unwrap();
        assert_eq!(card.motion.opacity, 0.5);
        assert!(view.find("card:1").is_none());
        assert!(view.find_switch("switch:dark_mode").unwrap().value);
        assert_eq!(view.keys(), vec!["card:0"]);
    }

    #[test]
    fn test_texts_in_order() {
        let view = sample();
        assert_eq!(view.texts(), vec!["Hello"]);
        assert!(view.contains_text("Hello"));
        assert!(!view.contains_text("Hell"));
    }

    #[test]
    fn test_outline() {
        let outline = sample().outline();
        let lines: Vec<&str> = outline.lines().collect();
        assert_eq!(lines[0], format!("{:?}", Layout::Column));
        assert!(lines[1].starts_with("  Column #card:0 [x=0.0 y=0.0 scale=1.00 opacity=0.50]"));
        assert_eq!(lines[2], "    \"Hello\"");
        assert_eq!(lines[3], "    icon heart-outline 20px");
        assert_eq!(lines[4], "  switch #switch:dark_mode on");
    }
}
