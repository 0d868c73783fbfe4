use crate::sprite::Sprite;
use crate::style::{Color, LineCap, LineJoin};

/// The host renderer's immediate-mode 2D drawing surface.
///
/// Implementations are expected to behave like an HTML-canvas style context:
/// path construction accumulates into a current path that `stroke` consumes,
/// state setters stay in effect until overwritten, and `save`/`restore`
/// scope the whole state block.
pub trait RenderContext {
    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);

    fn set_global_alpha(&mut self, alpha: f32);
    fn set_line_width(&mut self, width: f32);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn stroke(&mut self);

    /// Blit a sprite with its top-left corner at `(x, y)` in device space.
    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Command {
        Save,
        Restore,
        BeginPath,
        MoveTo(f32, f32),
        LineTo(f32, f32),
        ClosePath,
        GlobalAlpha(f32),
        LineWidth(f32),
        StrokeColor(Color),
        LineCap(LineCap),
        LineJoin(LineJoin),
        Stroke,
        DrawSprite {
            width: u32,
            height: u32,
            x: f32,
            y: f32,
        },
    }

    /// Records every drawing call so tests can assert on the exact stream
    /// the stamper issues.
    #[derive(Debug, Default)]
    pub struct RecordingContext {
        pub commands: Vec<Command>,
    }

    impl RecordingContext {
        pub fn new() -> RecordingContext {
            RecordingContext::default()
        }

        pub fn sprite_draws(&self) -> Vec<&Command> {
            self.commands
                .iter()
                .filter(|c| matches!(c, Command::DrawSprite { .. }))
                .collect()
        }

        pub fn line_widths(&self) -> Vec<f32> {
            self.commands
                .iter()
                .filter_map(|c| match c {
                    Command::LineWidth(w) => Some(*w),
                    _ => None,
                })
                .collect()
        }
    }

    impl RenderContext for RecordingContext {
        fn save(&mut self) {
            self.commands.push(Command::Save);
        }

        fn restore(&mut self) {
            self.commands.push(Command::Restore);
        }

        fn begin_path(&mut self) {
            self.commands.push(Command::BeginPath);
        }

        fn move_to(&mut self, x: f32, y: f32) {
            self.commands.push(Command::MoveTo(x, y));
        }

        fn line_to(&mut self, x: f32, y: f32) {
            self.commands.push(Command::LineTo(x, y));
        }

        fn close_path(&mut self) {
            self.commands.push(Command::ClosePath);
        }

        fn set_global_alpha(&mut self, alpha: f32) {
            self.commands.push(Command::GlobalAlpha(alpha));
        }

        fn set_line_width(&mut self, width: f32) {
            self.commands.push(Command::LineWidth(width));
        }

        fn set_stroke_color(&mut self, color: Color) {
            self.commands.push(Command::StrokeColor(color));
        }

        fn set_line_cap(&mut self, cap: LineCap) {
            self.commands.push(Command::LineCap(cap));
        }

        fn set_line_join(&mut self, join: LineJoin) {
            self.commands.push(Command::LineJoin(join));
        }

        fn stroke(&mut self) {
            self.commands.push(Command::Stroke);
        }

        fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32) {
            self.commands.push(Command::DrawSprite {
                width: sprite.width(),
                height: sprite.height(),
                x,
                y,
            });
        }
    }
}
