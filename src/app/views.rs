//! Screen composition and rendering (movie list, movie detail)

use super::navigation::Navigation;
use super::App;
use crate::app::fetch::CategorySlots;
use crate::constants::MOVIE_PAGE_BASE_URL;
use crate::theme;
use crate::types::Category;
use crate::ui::components::{movie_card, poster, section_label};
use eframe::egui;
use tracing::{debug, warn};

/// Everything a card shows, resolved from a movie record
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
}

/// A labeled row of cards for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub label: &'static str,
    pub cards: Vec<MovieCard>,
}

/// Build the rows shown on the list screen. Pure: same slots, same rows.
pub fn compose_rows(slots: &CategorySlots, image_base_url: &str) -> Vec<CategoryRow> {
    Category::DISPLAY_ORDER
        .iter()
        .map(|&category| CategoryRow {
            category,
            label: category.label(),
            cards: slots
                .get(category)
                .iter()
                .map(|movie| MovieCard {
                    id: movie.id,
                    title: movie.title.clone(),
                    overview: movie.overview.clone(),
                    poster_url: movie.poster_full_path(image_base_url),
                })
                .collect(),
        })
        .collect()
}

/// Hand a clicked card over to navigation
pub fn activate_card(card: &MovieCard, nav: &mut impl Navigation) {
    debug!(movie_id = card.id, title = %card.title, "Card activated");
    nav.open_detail(card.id);
}

/// Draw all rows. Returns the card clicked this frame, if any.
pub fn movie_rows<'a>(
    ui: &mut egui::Ui,
    rows: &'a [CategoryRow],
    poster_for: &mut dyn FnMut(&MovieCard) -> Option<egui::TextureHandle>,
) -> Option<&'a MovieCard> {
    let mut clicked = None;

    for row in rows {
        ui.add_space(theme::SPACING_MD);
        section_label(ui, row.label);
        ui.add_space(theme::SPACING_MD);

        egui::ScrollArea::horizontal()
            .id_salt(("category_row", row.category.endpoint()))
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
                    // Ids can repeat inside a row, so the card's position keys it
                    for (i, card) in row.cards.iter().enumerate() {
                        let texture = poster_for(card);
                        let id = ui.id().with(("movie_card", row.category.endpoint(), i));
                        let response =
                            movie_card(ui, id, &card.title, &card.overview, texture.as_ref());
                        if response.clicked() {
                            clicked = Some(card);
                        }
                    }
                    if row.cards.is_empty() {
                        // Keep the row height stable while a list is missing
                        ui.allocate_exact_size(
                            egui::vec2(0.0, theme::POSTER_SIZE.1),
                            egui::Sense::hover(),
                        );
                    }
                });
            });
    }

    clicked
}

impl App {
    pub(crate) fn render_movie_list(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let slots = self.orchestrator.slots().snapshot();
        let rows = compose_rows(&slots, &self.settings.image_base_url);

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("CineNow")
                        .size(theme::FONT_DISPLAY)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let refresh = theme::button(format!("{}  Refresh", egui_phosphor::regular::ARROW_CLOCKWISE));
                if ui.add(refresh).on_hover_text("Reload all lists (F5)").clicked() {
                    self.activate_screen(ctx);
                }
            });
        });

        let clicked = egui::ScrollArea::vertical()
            .id_salt("movie_list_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                movie_rows(ui, &rows, &mut |card| {
                    let url = card.poster_url.as_deref()?;
                    self.poster_texture(ctx, url)
                })
                .cloned()
            })
            .inner;

        if let Some(card) = clicked {
            activate_card(&card, &mut self.navigator);
        }
    }

    pub(crate) fn render_movie_detail(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, movie_id: i64) {
        let slots = self.orchestrator.slots().snapshot();
        let mut go_back = ctx.input(|i| {
            i.key_pressed(egui::Key::Escape) || i.pointer.button_clicked(egui::PointerButton::Extra1)
        });

        if self.navigator.depth() > 1 {
            let back = theme::button(format!("{}  Back", egui_phosphor::regular::ARROW_LEFT));
            if ui.add(back).clicked() {
                go_back = true;
            }
        }
        ui.add_space(theme::SPACING_LG);

        match slots.find(movie_id) {
            Some(movie) => {
                let texture = movie
                    .poster_full_path(&self.settings.image_base_url)
                    .and_then(|url| self.poster_texture(ctx, &url));

                egui::ScrollArea::vertical()
                    .id_salt(("movie_detail_scroll", movie_id))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.horizontal_top(|ui| {
                            let (w, h) = theme::DETAIL_POSTER_SIZE;
                            poster(ui, texture.as_ref(), egui::vec2(w, h));
                            ui.add_space(theme::SPACING_XL);

                            ui.vertical(|ui| {
                                ui.set_max_width(theme::DETAIL_TEXT_MAX_WIDTH);
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(&movie.title)
                                            .size(theme::FONT_TITLE)
                                            .strong()
                                            .color(theme::TEXT_PRIMARY),
                                    )
                                    .wrap(),
                                );
                                ui.add_space(theme::SPACING_MD);
                                let overview = if movie.overview.is_empty() {
                                    "No overview available."
                                } else {
                                    movie.overview.as_str()
                                };
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(overview)
                                            .size(theme::FONT_BODY)
                                            .color(theme::TEXT_SECONDARY),
                                    )
                                    .wrap(),
                                );
                                ui.add_space(theme::SPACING_XL);

                                let open_page = theme::button_accent(format!(
                                    "{}  Open on TMDB",
                                    egui_phosphor::regular::ARROW_SQUARE_OUT
                                ));
                                if ui.add(open_page).clicked() {
                                    let url = format!("{}/{}", MOVIE_PAGE_BASE_URL, movie.id);
                                    if let Err(e) = open::that(&url) {
                                        warn!(%url, error = %e, "Failed to open movie page");
                                    }
                                }
                            });
                        });
                    });
            }
            None => {
                ui.label(
                    egui::RichText::new("Movie not found")
                        .size(theme::FONT_TITLE)
                        .color(theme::TEXT_MUTED),
                );
            }
        }

        if go_back {
            self.navigator.back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::{Navigator, Route};
    use crate::types::MovieRecord;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn movie(id: i64) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {}", id),
            overview: format!("Overview {}", id),
            poster_path: Some(format!("/p{}.jpg", id)),
        }
    }

    fn slots_with(counts: [(Category, i64); 4]) -> CategorySlots {
        let mut slots = CategorySlots::default();
        for (category, n) in counts {
            let base = category.index() as i64 * 100;
            slots.set(category, (base..base + n).map(movie).collect());
        }
        slots
    }

    fn row(rows: &[CategoryRow], category: Category) -> &CategoryRow {
        rows.iter().find(|r| r.category == category).unwrap()
    }

    #[derive(Default)]
    struct RecordingNav {
        events: Vec<i64>,
    }

    impl Navigation for RecordingNav {
        fn open_detail(&mut self, movie_id: i64) {
            self.events.push(movie_id);
        }
    }

    #[test]
    fn test_rows_follow_display_order_with_labels() {
        let rows = compose_rows(&CategorySlots::default(), IMAGE_BASE);
        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Top rated", "Now Playing", "Popular", "Upcoming"]);
    }

    #[test]
    fn test_all_empty_slots_render_four_empty_rows() {
        let rows = compose_rows(&CategorySlots::default(), IMAGE_BASE);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.cards.is_empty()));
    }

    #[test]
    fn test_each_row_has_one_card_per_record_in_order() {
        let slots = slots_with([
            (Category::NowPlaying, 3),
            (Category::TopRated, 1),
            (Category::Popular, 0),
            (Category::Upcoming, 7),
        ]);
        let rows = compose_rows(&slots, IMAGE_BASE);

        for category in Category::ALL {
            let ids: Vec<i64> = row(&rows, category).cards.iter().map(|c| c.id).collect();
            let expected: Vec<i64> = slots.get(category).iter().map(|m| m.id).collect();
            assert_eq!(ids, expected, "{}", category);
        }
    }

    #[test]
    fn test_each_row_is_fed_by_its_own_slot() {
        let mut slots = CategorySlots::default();
        slots.set(Category::NowPlaying, vec![movie(1)]);
        slots.set(Category::Upcoming, vec![movie(2), movie(3)]);
        let rows = compose_rows(&slots, IMAGE_BASE);

        assert_eq!(row(&rows, Category::Upcoming).cards.len(), 2);
        assert_eq!(row(&rows, Category::Upcoming).cards[0].id, 2);
        assert_eq!(row(&rows, Category::NowPlaying).cards.len(), 1);
    }

    #[test]
    fn test_top_rated_failure_scenario() {
        let slots = slots_with([
            (Category::NowPlaying, 5),
            (Category::TopRated, 0),
            (Category::Popular, 5),
            (Category::Upcoming, 5),
        ]);
        let rows = compose_rows(&slots, IMAGE_BASE);

        assert!(row(&rows, Category::TopRated).cards.is_empty());
        for category in [Category::NowPlaying, Category::Popular, Category::Upcoming] {
            assert_eq!(row(&rows, category).cards.len(), 5);
        }
    }

    #[test]
    fn test_card_fields_and_poster_url() {
        let mut slots = CategorySlots::default();
        let mut no_poster = movie(9);
        no_poster.poster_path = None;
        slots.set(Category::Popular, vec![movie(8), no_poster]);
        let rows = compose_rows(&slots, IMAGE_BASE);
        let cards = &row(&rows, Category::Popular).cards;

        assert_eq!(cards[0].title, "Movie 8");
        assert_eq!(cards[0].overview, "Overview 8");
        assert_eq!(
            cards[0].poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p8.jpg")
        );
        assert_eq!(cards[1].poster_url, None);
    }

    #[test]
    fn test_composition_is_idempotent() {
        let slots = slots_with([
            (Category::NowPlaying, 2),
            (Category::TopRated, 4),
            (Category::Popular, 1),
            (Category::Upcoming, 3),
        ]);
        assert_eq!(compose_rows(&slots, IMAGE_BASE), compose_rows(&slots, IMAGE_BASE));
    }

    #[test]
    fn test_activating_card_signals_one_navigation_event() {
        let card = MovieCard {
            id: 42,
            title: "Answer".into(),
            overview: String::new(),
            poster_url: None,
        };
        let mut nav = RecordingNav::default();
        activate_card(&card, &mut nav);
        assert_eq!(nav.events, vec![42]);

        let mut navigator = Navigator::default();
        activate_card(&card, &mut navigator);
        assert_eq!(navigator.current(), Route::MovieDetail(42));
        assert_eq!(navigator.depth(), 2);
    }

    #[test]
    fn test_rows_render_headless_without_clicks() {
        let slots = slots_with([
            (Category::NowPlaying, 2),
            (Category::TopRated, 0),
            (Category::Popular, 0),
            (Category::Upcoming, 1),
        ]);
        let rows = compose_rows(&slots, IMAGE_BASE);
        let ctx = egui::Context::default();
        let mut poster_requests = 0;

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let clicked = movie_rows(ui, &rows, &mut |_| {
                        poster_requests += 1;
                        None
                    });
                    assert!(clicked.is_none());
                });
            });
        }

        // One lookup per card per pass; egui may run extra passes
        assert!(poster_requests >= 6);
        assert_eq!(poster_requests % 3, 0);
    }
}
