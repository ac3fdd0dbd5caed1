use crate::canvas::{Canvas, TextMetrics};
use crate::color::{legacy, Color};
use crate::math::Vec2;
use crate::primitives::Rect;
use crate::snapshot::ElementState;

/// A run of text drawn in one color
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub color: Color,
}

/// Multi-line text that sizes itself from the host's text metrics
///
/// The element's size is recomputed whenever text, scale or spacing change,
/// or the host's line height differs from the one last measured with.
/// Without metrics the last computed size is kept and nothing is drawn.
#[derive(Debug, Clone)]
pub struct TextElement {
    text: String,
    scale: f32,
    line_spacing: f32,
    shadow: bool,
    color_codes: bool,
    size_dirty: bool,
    /// Line height of the metrics the current size was measured with
    measured_line_height: Option<f32>,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scale: 1.0,
            line_spacing: 1.0,
            shadow: false,
            color_codes: false,
            size_dirty: true,
            measured_line_height: None,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.set_scale(scale);
        self
    }

    /// Gap between lines as a fraction of the line height
    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.set_line_spacing(line_spacing);
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Interpret `&0`..`&f` as color switches
    pub fn with_color_codes(mut self, color_codes: bool) -> Self {
        self.color_codes = color_codes;
        self.size_dirty = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.size_dirty = true;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.size_dirty = true;
    }

    pub fn set_line_spacing(&mut self, line_spacing: f32) {
        self.line_spacing = line_spacing;
        self.size_dirty = true;
    }

    pub fn set_shadow(&mut self, shadow: bool) {
        self.shadow = shadow;
    }

    /// Whether the size still has to be measured
    pub fn needs_measure(&self) -> bool {
        self.size_dirty
    }

    /// Force a re-measure on the next frame, for font changes that keep the
    /// line height
    pub fn invalidate_size(&mut self) {
        self.size_dirty = true;
    }

    /// Split one line into colored runs, starting in `base`
    pub fn runs(&self, line: &str, base: Color) -> Vec<TextRun> {
        if !self.color_codes {
            return vec![TextRun {
                text: line.to_string(),
                color: base,
            }];
        }
        parse_color_codes(line, base)
    }

    /// Unscaled (width, height) of the whole text
    pub fn measure(&self, metrics: &dyn TextMetrics) -> Vec2 {
        let line_height = metrics.line_height();
        let mut width: f32 = 0.0;
        let mut lines = 0;
        for line in self.text.split('\n') {
            let line_width = self
                .runs(line, Color::WHITE)
                .iter()
                .map(|run| metrics.measure_width(&run.text))
                .sum::<f32>();
            width = width.max(line_width);
            lines += 1;
        }
        let height = line_height * lines as f32 + line_height * self.line_spacing * (lines - 1) as f32;
        Vec2::new(width, height)
    }

    pub(crate) fn refresh_size(&mut self, state: &mut ElementState, metrics: Option<&dyn TextMetrics>) {
        let Some(metrics) = metrics else {
            return;
        };
        let line_height = metrics.line_height();
        if !self.size_dirty && self.measured_line_height == Some(line_height) {
            return;
        }
        let size = self.measure(metrics) * self.scale;
        state.size.x = size.x;
        state.size.y = size.y;
        self.size_dirty = false;
        self.measured_line_height = Some(line_height);
    }

    pub(crate) fn draw(&self, state: &ElementState, bounds: Rect, canvas: &mut dyn Canvas) {
        let Some(placed) = self.layout_runs(state, bounds.min_vec(), canvas.text_metrics()) else {
            log::debug!("Skipping text draw, no text metrics available");
            return;
        };

        let scaled = self.scale != 1.0;
        if scaled {
            canvas.push_transform();
            canvas.scale_about(bounds.min_vec(), self.scale);
        }
        for (run, position) in &placed {
            canvas.draw_text(&run.text, *position, run.color, self.shadow);
        }
        if scaled {
            canvas.pop_transform();
        }
    }

    /// Position every run in unscaled space anchored at `origin`
    fn layout_runs(&self, state: &ElementState, origin: Vec2, metrics: Option<&dyn TextMetrics>) -> Option<Vec<(TextRun, Vec2)>> {
        let metrics = metrics?;
        let pitch = metrics.line_height() * (1.0 + self.line_spacing);
        let mut placed = Vec::new();
        for (index, line) in self.text.split('\n').enumerate() {
            let mut x = origin.x;
            let y = origin.y + pitch * index as f32;
            for run in self.runs(line, state.color) {
                let width = metrics.measure_width(&run.text);
                placed.push((run, Vec2::new(x, y)));
                x += width;
            }
        }
        Some(placed)
    }
}

/// Split `line` at `&`-codes. Unknown codes are consumed without changing color.
fn parse_color_codes(line: &str, base: Color) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut color = base;
    let mut buffer = String::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        if ch == '&' {
            if let Some(code) = chars.next() {
                if !buffer.is_empty() {
                    runs.push(TextRun {
                        text: std::mem::take(&mut buffer),
                        color,
                    });
                }
                color = legacy::from_code(code).unwrap_or(color);
                continue;
            }
        }
        buffer.push(ch);
    }
    if !buffer.is_empty() {
        runs.push(TextRun { text: buffer, color });
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{FixedMetrics, RecordingCanvas};

    const METRICS: FixedMetrics = FixedMetrics {
        char_width: 6.0,
        line_height: 9.0,
    };

    #[test]
    fn test_color_codes_split_runs() {
        let runs = parse_color_codes("&cRed&aGreen plain", Color::WHITE);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Red");
        assert_eq!(runs[0].color, legacy::RED);
        assert_eq!(runs[1].text, "Green plain");
        assert_eq!(runs[1].color, legacy::GREEN);
    }

    #[test]
    fn test_unknown_code_keeps_color_and_trailing_ampersand_is_literal() {
        let runs = parse_color_codes("a&zb&", Color::WHITE);
        assert_eq!(
            runs,
            vec![
                TextRun { text: "a".into(), color: Color::WHITE },
                TextRun { text: "b&".into(), color: Color::WHITE },
            ]
        );
    }

    #[test]
    fn test_measure_multi_line() {
        let text = TextElement::new("abcd\nab").with_line_spacing(0.5);
        assert_eq!(text.measure(&METRICS), Vec2::new(24.0, 22.5));
    }

    #[test]
    fn test_measure_ignores_color_codes() {
        let text = TextElement::new("&cab").with_color_codes(true);
        assert_eq!(text.measure(&METRICS).x, 12.0);
    }

    #[test]
    fn test_size_stays_stale_without_metrics() {
        let mut text = TextElement::new("hello").with_scale(2.0);
        let mut state = ElementState::default();
        text.refresh_size(&mut state, None);
        assert_eq!(state.size.x, 0.0);
        assert!(text.needs_measure());

        text.refresh_size(&mut state, Some(&METRICS));
        assert_eq!((state.size.x, state.size.y), (60.0, 18.0));
        assert!(!text.needs_measure());

        text.set_text("hi");
        text.refresh_size(&mut state, None);
        assert_eq!(state.size.x, 60.0);
    }

    #[test]
    fn test_remeasures_when_line_height_changes() {
        let mut text = TextElement::new("hello");
        let mut state = ElementState::default();
        text.refresh_size(&mut state, Some(&METRICS));
        assert_eq!((state.size.x, state.size.y), (30.0, 9.0));

        let larger = FixedMetrics {
            char_width: 8.0,
            line_height: 12.0,
        };
        text.refresh_size(&mut state, Some(&larger));
        assert_eq!((state.size.x, state.size.y), (40.0, 12.0));

        // Same line height, wider glyphs: only an explicit invalidation re-measures
        let wider = FixedMetrics {
            char_width: 10.0,
            line_height: 12.0,
        };
        text.refresh_size(&mut state, Some(&wider));
        assert_eq!(state.size.x, 40.0);
        text.invalidate_size();
        text.refresh_size(&mut state, Some(&wider));
        assert_eq!(state.size.x, 50.0);
    }

    #[test]
    fn test_draw_needs_metrics() {
        let text = TextElement::new("hello");
        let bounds = Rect::from_min_size([0.0, 0.0], [30.0, 9.0]);
        let mut canvas = RecordingCanvas::new(Vec2::new(100.0, 100.0));
        text.draw(&ElementState::default(), bounds, &mut canvas);
        assert!(canvas.commands.is_empty());

        let mut canvas = RecordingCanvas::new(Vec2::new(100.0, 100.0)).with_metrics(METRICS);
        text.draw(&ElementState::default(), bounds, &mut canvas);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn test_lines_advance_by_pitch() {
        let text = TextElement::new("a\nb").with_line_spacing(1.0);
        let bounds = Rect::from_min_size([5.0, 10.0], [6.0, 27.0]);
        let mut canvas = RecordingCanvas::new(Vec2::new(100.0, 100.0)).with_metrics(METRICS);
        text.draw(&ElementState::default(), bounds, &mut canvas);
        let positions: Vec<Vec2> = canvas
            .commands
            .iter()
            .filter_map(|command| match command {
                crate::canvas::DrawCommand::Text { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![Vec2::new(5.0, 10.0), Vec2::new(5.0, 28.0)]);
    }
}
