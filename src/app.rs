//! Main application state and UI.

use crate::counter::Counter;
use crate::product::{generate_products, Product};
use crate::search::ProductSearch;
use crate::settings::Settings;
use crate::theme;
use crate::widgets::{icon, Icon, SelectState, VirtualList, VirtualSelect, DEFAULT_OVERSCAN};
use eframe::egui::{self, Align, Align2, Color32, FontId, Layout, Margin, RichText, Rounding, Sense, Vec2};
use std::time::Instant;

/// Gap above each product row inside its slot.
const PRODUCT_ROW_GAP: f32 = 10.0;
const SIDEBAR_WIDTH: f32 = 200.0;

/// Sidebar navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavItem {
    Dashboard,
    Status,
    Reports,
    Notification,
}

impl NavItem {
    const ALL: [NavItem; 4] = [
        NavItem::Dashboard,
        NavItem::Status,
        NavItem::Reports,
        NavItem::Notification,
    ];

    fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Status => "Status",
            NavItem::Reports => "Reports",
            NavItem::Notification => "Notification",
        }
    }
}

/// Only the dashboard page exists; the other entries are decorative.
const ACTIVE_NAV: NavItem = NavItem::Dashboard;

/// What the product list card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductListState {
    Empty,
    Rows(usize),
}

/// Main dashboard application
pub struct DashboardApp {
    settings: Settings,

    // Catalogue, generated once
    products: Vec<Product>,
    option_names: Vec<String>,

    // Card state
    counter: Counter,
    search: ProductSearch,
    selected: String,
    select_state: SelectState,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        cc.egui_ctx.set_visuals(theme::visuals());
        Self::with_settings(settings)
    }

    fn with_settings(settings: Settings) -> Self {
        let started = Instant::now();
        let products = generate_products(settings.product_count);
        let option_names = products.iter().map(|p| p.name.clone()).collect();
        let search = ProductSearch::new(&products, settings.search_debounce());
        tracing::info!(
            count = products.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generated product catalogue"
        );

        Self {
            settings,
            products,
            option_names,
            counter: Counter::default(),
            search,
            selected: String::new(),
            select_state: SelectState::default(),
        }
    }

    fn increment(&mut self) {
        self.counter.increment();
    }

    fn decrement(&mut self) {
        self.counter.decrement();
    }

    /// Apply a pending search if its quiet period is over
    fn tick(&mut self, now: Instant) -> bool {
        self.search.tick(&self.products, now)
    }

    fn select_product(&mut self, name: String) {
        tracing::info!(product = %name, "Product selected");
        self.selected = name;
    }

    fn details_text(&self) -> String {
        if self.selected.is_empty() {
            "Product Detail Card".to_string()
        } else {
            format!("Details of {}", self.selected)
        }
    }

    fn list_state(&self) -> ProductListState {
        match self.search.filtered().len() {
            0 => ProductListState::Empty,
            n => ProductListState::Rows(n),
        }
    }

    /// Release the pending search so nothing runs against a closed window
    fn teardown(&mut self) {
        if self.search.cancel() {
            tracing::debug!("Cancelled pending search on exit");
        }
    }

    fn render_sidebar(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(RichText::new("Logo").size(22.0).strong());
        ui.add_space(24.0);

        for item in NavItem::ALL {
            let active = item == ACTIVE_NAV;
            let (fill, color) = if active {
                (theme::accent::INDIGO, theme::text::ON_ACCENT)
            } else {
                (Color32::TRANSPARENT, theme::text::SECONDARY)
            };
            // Navigation is decorative
            let _ = ui.add_sized(
                [ui.available_width(), 36.0],
                egui::Button::new(RichText::new(item.label()).color(color)).fill(fill),
            );
            ui.add_space(4.0);
        }

        ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
            ui.add_space(8.0);
            let _ = ui.add_sized(
                [ui.available_width(), 36.0],
                egui::Button::new(RichText::new("Logout ↪").color(theme::text::SECONDARY)),
            );
        });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Dashboard").size(24.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(36.0), Sense::hover());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), 18.0, theme::accent::INDIGO);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "R",
                    FontId::proportional(16.0),
                    theme::text::ON_ACCENT,
                );
            });
        });
    }

    fn render_product_list_card(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading("List of Products");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // Search runs as you type; the button is decorative
                    egui::Frame::none()
                        .fill(theme::bg::TILE)
                        .rounding(Rounding::same(theme::CONTROL_ROUNDING))
                        .inner_margin(Margin::same(7.0))
                        .show(ui, |ui| {
                            icon(ui, Icon::Search, theme::text::SECONDARY);
                        });

                    let edit = ui.add(
                        egui::TextEdit::singleline(self.search.query_mut())
                            .hint_text("Search Product…")
                            .desired_width(200.0),
                    );
                    if edit.changed() {
                        self.search.query_changed(Instant::now());
                    }
                });
            });
            ui.add_space(8.0);

            match self.list_state() {
                ProductListState::Empty => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(RichText::new("No Products Found").color(theme::text::MUTED));
                        ui.add_space(20.0);
                    });
                }
                ProductListState::Rows(count) => {
                    let products = &self.products;
                    let filtered = self.search.filtered();
                    VirtualList::new(count, self.settings.list_row_height)
                        .height(self.settings.list_height)
                        .overscan(DEFAULT_OVERSCAN)
                        .show(ui, "product_list", |ui, row, index| {
                            paint_product_row(ui, row, &products[filtered[index]]);
                        });
                }
            }
        });
    }

    fn render_counter_card(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Counter with products");
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let square = Vec2::splat(40.0);
                if ui.add(egui::Button::new(RichText::new("–").size(18.0)).min_size(square)).clicked() {
                    self.decrement();
                }

                egui::Frame::none()
                    .fill(theme::bg::TILE)
                    .rounding(Rounding::same(theme::CONTROL_ROUNDING))
                    .inner_margin(Margin::symmetric(24.0, 10.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(self.counter.value().to_string()).size(18.0).strong());
                    });

                if ui.add(egui::Button::new(RichText::new("+").size(18.0)).min_size(square)).clicked() {
                    self.increment();
                }
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                for n in 1..=3 {
                    egui::Frame::none()
                        .fill(theme::bg::TILE)
                        .rounding(Rounding::same(theme::CONTROL_ROUNDING))
                        .inner_margin(Margin::symmetric(20.0, 14.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(n.to_string()).strong());
                        });
                }
            });
        });
    }

    fn render_details_card(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Product Details");
            ui.add_space(8.0);

            let choice = VirtualSelect::new(&self.option_names, &self.selected)
                .placeholder("Select Product")
                .row_height(self.settings.select_row_height)
                .popup_height(self.settings.select_height)
                .show(ui, &mut self.select_state);
            if let Some(name) = choice {
                self.select_product(name);
            }
            ui.add_space(12.0);

            egui::Frame::none()
                .fill(theme::bg::ROW)
                .rounding(Rounding::same(theme::CONTROL_ROUNDING))
                .inner_margin(Margin::same(16.0))
                .show(ui, |ui| {
                    ui.set_min_size(Vec2::new(ui.available_width(), 120.0));
                    ui.label(RichText::new(self.details_text()).color(theme::text::SECONDARY));
                });
        });
    }
}

/// Paint one product row inside its virtual-list slot.
fn paint_product_row(ui: &egui::Ui, slot: egui::Rect, product: &Product) {
    let rect = egui::Rect::from_min_max(slot.min + Vec2::new(0.0, PRODUCT_ROW_GAP), slot.max);
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, theme::bg::ROW);

    painter.text(
        rect.left_top() + Vec2::new(14.0, 9.0),
        Align2::LEFT_TOP,
        &product.name,
        FontId::proportional(14.0),
        theme::text::PRIMARY,
    );
    painter.text(
        rect.left_top() + Vec2::new(14.0, 29.0),
        Align2::LEFT_TOP,
        &product.subtitle,
        FontId::proportional(12.0),
        theme::text::SECONDARY,
    );

    let (glyph, color) = if product.ok {
        (Icon::Check, theme::state::OK)
    } else {
        (Icon::Close, theme::state::BAD)
    };
    let badge_center = rect.right_center() - Vec2::new(28.0, 0.0);
    painter.circle_filled(badge_center, 16.0, color.linear_multiply(0.15));
    glyph.paint(
        &painter,
        egui::Rect::from_center_size(badge_center, Vec2::splat(glyph.size())),
        color,
    );
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick(now);

        // Wake up when the pending search is due, even without input
        if let Some(remaining) = self.search.time_remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .frame(
                egui::Frame::none()
                    .fill(theme::bg::SIDEBAR)
                    .inner_margin(Margin::same(16.0)),
            )
            .show(ctx, |ui| self.render_sidebar(ui));

        egui::TopBottomPanel::top("topbar")
            .frame(
                egui::Frame::none()
                    .fill(theme::bg::CANVAS)
                    .inner_margin(Margin::symmetric(20.0, 14.0)),
            )
            .show(ctx, |ui| self.render_header(ui));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme::bg::CANVAS)
                    .inner_margin(Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    self.render_product_list_card(&mut columns[0]);
                    self.render_counter_card(&mut columns[1]);
                    columns[1].add_space(16.0);
                    self.render_details_card(&mut columns[1]);
                });
            });
    }

    /// Nothing survives the session, not even scroll offsets.
    fn persist_egui_memory(&self) -> bool {
        false
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
