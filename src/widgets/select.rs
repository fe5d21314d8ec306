//! Dropdown selector over a large option set.
//!
//! The popup hosts a [`VirtualList`], so opening it over tens of thousands of
//! options only paints the rows in view. Options are not filtered here.

use super::icons::Icon;
use super::virtual_list::{VirtualList, DEFAULT_OVERSCAN};
use crate::theme;
use egui::{Align2, CursorIcon, FontId, Order, Rect, Rounding, Sense, Ui, Vec2};

const TRIGGER_HEIGHT: f32 = 40.0;
const TEXT_PADDING_X: f32 = 12.0;

/// Open/closed state, owned by the caller across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectState {
    open: bool,
}

impl SelectState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Accept `option` as the new value and close the popup.
    pub fn choose(&mut self, option: &str) -> String {
        self.open = false;
        option.to_string()
    }
}

pub struct VirtualSelect<'a> {
    options: &'a [String],
    value: &'a str,
    placeholder: &'a str,
    row_height: f32,
    popup_height: f32,
}

impl<'a> VirtualSelect<'a> {
    pub fn new(options: &'a [String], value: &'a str) -> Self {
        Self {
            options,
            value,
            placeholder: "Select Product",
            row_height: 40.0,
            popup_height: 300.0,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn popup_height(mut self, popup_height: f32) -> Self {
        self.popup_height = popup_height;
        self
    }

    /// Text shown on the closed trigger.
    pub fn trigger_text(&self) -> &str {
        if self.value.is_empty() {
            self.placeholder
        } else {
            self.value
        }
    }

    /// Draw the trigger (and popup while open). Returns the option clicked this frame.
    pub fn show(self, ui: &mut Ui, state: &mut SelectState) -> Option<String> {
        let size = Vec2::new(ui.available_width(), TRIGGER_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let response = response.on_hover_cursor(CursorIcon::PointingHand);

        if ui.is_rect_visible(rect) {
            self.paint_trigger(ui, rect);
        }

        if response.clicked() {
            state.toggle();
        }

        if !state.is_open() {
            return None;
        }

        let mut chosen = None;
        let value = self.value;
        let options = self.options;
        let row_height = self.row_height;

        egui::Area::new(response.id.with("virtual_select_popup"))
            .order(Order::Foreground)
            .fixed_pos(rect.left_bottom())
            .show(ui.ctx(), |ui| {
                egui::Frame::none()
                    .fill(theme::bg::CARD)
                    .stroke(theme::stroke(theme::border::DEFAULT, 1.0))
                    .show(ui, |ui| {
                        ui.set_width(rect.width());
                        VirtualList::new(options.len(), row_height)
                            .height(self.popup_height)
                            .overscan(DEFAULT_OVERSCAN)
                            .show(ui, "virtual_select_options", |ui, row, index| {
                                let option = &options[index];
                                let row_response = ui
                                    .interact(row, ui.id().with(("select_option", index)), Sense::click())
                                    .on_hover_cursor(CursorIcon::PointingHand);

                                paint_option(ui, row, option, option == value);

                                if row_response.clicked() {
                                    chosen = Some(index);
                                }
                            });
                    });
            });

        chosen.map(|index| {
            let option = state.choose(&options[index]);
            tracing::debug!(option = %option, "Dropdown option chosen");
            option
        })
    }

    fn paint_trigger(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        let rounding = Rounding::same(theme::CONTROL_ROUNDING);
        painter.rect_filled(rect, rounding, theme::bg::CARD);
        painter.rect_stroke(rect.shrink(0.5), rounding, theme::stroke(theme::border::DEFAULT, 1.0));

        let color = if self.value.is_empty() {
            theme::text::SECONDARY
        } else {
            theme::text::PRIMARY
        };
        painter.text(
            rect.left_center() + Vec2::new(TEXT_PADDING_X, 0.0),
            Align2::LEFT_CENTER,
            self.trigger_text(),
            FontId::proportional(14.0),
            color,
        );

        let chevron_size = Icon::Chevron.size();
        let chevron = Rect::from_center_size(
            rect.right_center() - Vec2::new(TEXT_PADDING_X + chevron_size / 2.0, 0.0),
            Vec2::splat(chevron_size),
        );
        Icon::Chevron.paint(&painter, chevron, theme::state::CHEVRON);
    }
}

fn paint_option(ui: &Ui, row: Rect, option: &str, is_current: bool) {
    if !ui.is_rect_visible(row) {
        return;
    }

    let painter = ui.painter_at(row);
    let fill = if is_current {
        theme::accent::SELECTED_OPTION
    } else {
        theme::bg::CARD
    };
    painter.rect_filled(row, 0.0, fill);
    painter.line_segment(
        [row.left_bottom(), row.right_bottom()],
        theme::stroke(theme::border::SUBTLE, 1.0),
    );
    painter.text(
        row.left_center() + Vec2::new(TEXT_PADDING_X, 0.0),
        Align2::LEFT_CENTER,
        option,
        FontId::proportional(14.0),
        theme::text::PRIMARY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput};

    #[test]
    fn test_toggle_flips_state() {
        let mut state = SelectState::default();
        assert!(!state.is_open());
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn test_choose_closes() {
        let mut state = SelectState::default();
        state.toggle();
        let value = state.choose("Product 7");
        assert_eq!(value, "Product 7");
        assert!(!state.is_open());
    }

    fn frame(
        ctx: &egui::Context,
        events: Vec<Event>,
        options: &[String],
        state: &mut SelectState,
    ) -> Option<String> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut chosen = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(option) = VirtualSelect::new(options, "").show(ui, state) {
                    chosen = Some(option);
                }
            });
        });
        chosen
    }

    /// Press then release at `pos` over two frames.
    fn click(
        ctx: &egui::Context,
        pos: Pos2,
        options: &[String],
        state: &mut SelectState,
    ) -> Option<String> {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        };
        let pressed = frame(ctx, vec![Event::PointerMoved(pos), button(true)], options, state);
        let released = frame(ctx, vec![button(false)], options, state);
        pressed.or(released)
    }

    #[test]
    fn test_click_trigger_then_option() {
        let ctx = egui::Context::default();
        let options: Vec<String> = (1..=1_000).map(|i| format!("Product {}", i)).collect();
        let mut state = SelectState::default();

        frame(&ctx, vec![], &options, &mut state);

        // Trigger spans the top 40 points of the panel
        assert_eq!(click(&ctx, Pos2::new(100.0, 28.0), &options, &mut state), None);
        assert!(state.is_open());

        // Let the popup area lay itself out
        frame(&ctx, vec![], &options, &mut state);
        frame(&ctx, vec![], &options, &mut state);

        // Popup starts under the trigger; third 40-point row
        let chosen = click(&ctx, Pos2::new(100.0, 48.0 + 2.5 * 40.0), &options, &mut state);
        assert_eq!(chosen.as_deref(), Some("Product 3"));
        assert!(!state.is_open());
    }

    #[test]
    fn test_trigger_text_falls_back_to_placeholder() {
        let options = vec!["Product 1".to_string()];
        assert_eq!(VirtualSelect::new(&options, "").trigger_text(), "Select Product");
        assert_eq!(
            VirtualSelect::new(&options, "").placeholder("Pick one").trigger_text(),
            "Pick one"
        );
        assert_eq!(VirtualSelect::new(&options, "Product 1").trigger_text(), "Product 1");
    }
}
