//! UI component primitives for Todo Smart
//!
//! Components are Rust structs with serializable properties that an
//! external renderer turns into native views. A screen renders to a tree
//! of [`Element`]s; nothing here draws pixels.
//!
//! # Available Components
//!
//! - [`View`] - Layout container
//! - [`Text`] - Text run with a resolved [`TextStyle`]
//! - [`Pressable`] - Touch target wrapping child elements

use crate::tokens::{Color, Shadow};
use crate::typography::TextStyle;
use i18n::TextDirection;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Layout and decoration properties shared by all components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Cross-axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    /// Layout direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<TextDirection>,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

/// Spacing values (padding)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create vertical-only spacing
    pub fn vertical(value: f32) -> Self {
        Spacing::Symmetric {
            vertical: value,
            horizontal: 0.0,
        }
    }

    /// Values carried by this spacing
    pub fn values(&self) -> Vec<f32> {
        match *self {
            Spacing::Uniform(v) => vec![v],
            Spacing::Symmetric {
                vertical,
                horizontal,
            } => vec![vertical, horizontal],
        }
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start (right edge in RTL)
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Start of the writing direction (default)
    #[default]
    Start,
    /// Center aligned
    Center,
    /// End of the writing direction
    End,
}

// =============================================================================
// View Component
// =============================================================================

/// Layout container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl View {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the view ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Set flex grow
    pub fn with_flex(mut self, flex: f32) -> Self {
        self.style.flex = Some(flex);
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Set layout direction
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.style.direction = Some(direction);
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Text content
    pub content: String,
    /// Typography
    #[serde(default)]
    pub text_style: TextStyle,
    /// Text alignment
    #[serde(default)]
    pub align: TextAlign,
    /// Writing direction override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writing_direction: Option<TextDirection>,
    /// Layout style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            text_style: TextStyle::default(),
            align: TextAlign::Start,
            writing_direction: None,
            style: StyleProps::default(),
        }
    }

    /// Set the text ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set typography
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Set top margin
    pub fn with_margin_top(mut self, margin: f32) -> Self {
        self.style.margin_top = Some(margin);
        self
    }

    /// Set text alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set writing direction
    pub fn with_writing_direction(mut self, direction: TextDirection) -> Self {
        self.writing_direction = Some(direction);
        self
    }
}

// =============================================================================
// Pressable Component
// =============================================================================

/// Touch target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pressable {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Accessible label for screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Whether the control is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Pressable {
    /// Create a pressable bound to a handler
    pub fn new(handler: impl Into<String>) -> Self {
        Self {
            on_press: Some(handler.into()),
            ..Default::default()
        }
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Set accessibility label
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

// =============================================================================
// Element Tree
// =============================================================================

/// A node in a rendered component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Layout container
    View(View),
    /// Text run
    Text(Text),
    /// Touch target
    Pressable(Pressable),
}

impl From<View> for Element {
    fn from(view: View) -> Self {
        Element::View(view)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl From<Pressable> for Element {
    fn from(pressable: Pressable) -> Self {
        Element::Pressable(pressable)
    }
}

impl Element {
    /// Child elements (empty for text)
    pub fn children(&self) -> &[Element] {
        match self {
            Element::View(v) => &v.children,
            Element::Pressable(p) => &p.children,
            Element::Text(_) => &[],
        }
    }

    /// Layout style of this element
    pub fn style(&self) -> &StyleProps {
        match self {
            Element::View(v) => &v.style,
            Element::Text(t) => &t.style,
            Element::Pressable(p) => &p.style,
        }
    }

    /// All elements in depth-first pre-order, including `self`
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(el) = stack.pop() {
            out.push(el);
            stack.extend(el.children().iter().rev());
        }
        out
    }

    /// Text contents in document order
    pub fn texts(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|el| match el {
                Element::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Find a pressable by handler identifier
    pub fn find_pressable(&self, handler: &str) -> Option<&Pressable> {
        self.descendants().into_iter().find_map(|el| match el {
            Element::Pressable(p) if p.on_press.as_deref() == Some(handler) => Some(p),
            _ => None,
        })
    }

    /// Every color value used in the tree
    pub fn colors(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for el in self.descendants() {
            if let Some(c) = &el.style().background_color {
                out.push(c.as_str());
            }
            if let Some(s) = &el.style().shadow {
                out.push(s.shadow_color.as_str());
            }
            if let Element::Text(t) = el {
                if let Some(c) = &t.text_style.color {
                    out.push(c.as_str());
                }
            }
        }
        out
    }
}
