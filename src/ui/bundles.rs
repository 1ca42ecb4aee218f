use bevy::color::Color;
use bevy::prelude::*;

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }

    /// A default handle keeps Bevy's built-in font.
    pub fn with_font(mut self, font: Handle<Font>) -> Self {
        self.font.font = font;
        self
    }
}

/// Column anchored to the bottom-left corner of the window.
#[derive(Bundle)]
pub struct CornerColumnBundle {
    pub node: Node,
    pub background: BackgroundColor,
}

impl CornerColumnBundle {
    pub fn bottom_left(margin: f32) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                left: Val::Px(margin),
                bottom: Val::Px(margin),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            background: BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
        }
    }
}
