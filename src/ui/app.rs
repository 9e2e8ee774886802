//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::{ChoiceKind, Difficulty, GameConfig, GameError, GameSession, GameStatus, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
    /// Last rejected action, shown until the next successful one
    message: Option<String>,
}

impl GomokuApp {
    /// Create the app with the start-up configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            session: GameSession::new(config, Instant::now())?,
            board_view: BoardView::default(),
            show_debug: false,
            message: None,
        })
    }

    fn new_game(&mut self, config: GameConfig) {
        self.message = self
            .session
            .restart_with(config, Instant::now())
            .err()
            .map(|err| err.to_string());
    }

    /// New game against the computer, keeping size and difficulty
    fn new_game_vs_computer(&mut self, human_first: bool) {
        let mut config = *self.session.config();
        config.opponent.enabled = true;
        config.opponent.human_first = human_first;
        self.new_game(config);
    }

    fn restart(&mut self) {
        self.session.restart(Instant::now());
        self.message = None;
    }

    fn undo(&mut self) {
        match self.session.undo(Instant::now()) {
            Ok(count) => {
                debug!(count, "undo");
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn redo(&mut self) {
        match self.session.redo(Instant::now()) {
            Ok(count) => {
                debug!(count, "redo");
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn hint(&mut self) {
        if self.session.hint().is_none() {
            self.message = Some("No suggestion available".to_string());
        }
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.set_difficulty(difficulty);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer - Black)").clicked() {
                        self.new_game_vs_computer(true);
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Computer - White)").clicked() {
                        self.new_game_vs_computer(false);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hot-seat)").clicked() {
                        let size = self.session.config().board_size;
                        self.new_game(GameConfig::two_player(size));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        self.redo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    let current = self.session.config().opponent.difficulty;
                    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
                        if ui.radio(current == difficulty, difficulty.name()).clicked() {
                            self.set_difficulty(difficulty);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.mode_text());
                });
            });
        });
    }

    fn mode_text(&self) -> String {
        let opponent = &self.session.config().opponent;
        match self.session.computer_stone() {
            Some(computer) => format!(
                "vs Computer ({}) - You: {}",
                opponent.difficulty.name(),
                computer.opponent().name()
            ),
            None => "Hot-seat".to_string(),
        }
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                let status = self.session.state().status();
                if status.is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, status);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.state().current_player();
            let (stone_color, accent) = match turn {
                Stone::White => (BLACK_STONE, WHITE_STONE),
                _ => (TEXT_PRIMARY, BLACK_STONE_HIGHLIGHT),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().circle_stroke(rect.center(), 22.0, egui::Stroke::new(1.0, stone_color));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (text, color) = if self.session.is_opponent_thinking() {
                        ("Computer thinking...", STATUS_WAIT)
                    } else if self.session.state().is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(text).size(12.0).color(color));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let history = self.session.state().history();
            let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

            ui.horizontal(|ui| {
                if Self::action_button(ui, "↩ Undo", can_undo) {
                    self.undo();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "↪ Redo", can_redo) {
                    self.redo();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "Hint", self.session.is_human_turn()) {
                    self.hint();
                }
            });

            ui.add_space(6.0);
            if Self::action_button(ui, "New Game (N)", true) {
                self.restart();
            }

            ui.add_space(8.0);
            let count = self.session.state().move_count();
            ui.label(RichText::new(format!("Move #{count}")).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Styled clickable label; returns true when clicked while enabled
    fn action_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
        let color = if enabled { TEXT_PRIMARY } else { TEXT_MUTED };
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(12.0).color(color)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
            && enabled
    }

    /// Render the opponent's last decision
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(choice) = self.session.last_choice() else {
                ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let kind = match choice.kind {
                ChoiceKind::Opening => "Opening",
                ChoiceKind::ImmediateWin => "Winning move",
                ChoiceKind::Block => "Block",
                ChoiceKind::Heuristic => "Heuristic",
                ChoiceKind::Fallback => "Fallback",
            };
            ui.label(RichText::new(kind).size(11.0).strong().color(STATUS_OK));
            ui.label(RichText::new(format!("Score: {}", choice.score)).size(10.0).color(TEXT_SECONDARY));

            if let Some(pos) = choice.best_move {
                let size = self.session.state().board().size();
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {}", pos.notation(size))).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, status: GameStatus) {
        let headline = match status {
            GameStatus::Won(stone) => format!("{} WINS!", stone.name().to_uppercase()),
            _ => "DRAW".to_string(),
        };
        let detail = match status {
            GameStatus::Won(_) => "by five in a row",
            _ => "the board is full",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if Self::action_button(ui, "New Game", true) {
                        self.restart();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                self.session.state(),
                self.session.suggested_move(),
                self.session.is_human_turn(),
            );

            if let Some(pos) = clicked {
                match self.session.submit_move(pos, Instant::now()) {
                    Ok(_) => self.message = None,
                    Err(err) => self.message = Some(err.to_string()),
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, undo, redo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            self.hint();
        }
        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if new_game {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Play the computer's reply once its delay has passed
        let now = Instant::now();
        self.session.poll(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(due) = self.session.reply_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}
