use crate::core::screen::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    LoadingScreen, LyricsView, QuizView, SearchScreen, StudyCardsView, SummaryView, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Padding, Paragraph};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, main_area, status_area, help_area] = layout.areas(frame.area());

    let screen = app.navigation.screen();

    TitleBar {
        screen,
        song: app.navigation.selected_song(),
    }
    .render(frame, title_area);

    let main_area = Block::default()
        .padding(Padding::horizontal(1))
        .inner(main_area);
    draw_screen(frame, main_area, app, tui, spinner_frame);

    if !app.status_message.is_empty() {
        frame.render_widget(
            Span::styled(
                format!(" {}", app.status_message),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            status_area,
        );
    }

    frame.render_widget(
        Paragraph::new(help_text(screen)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_screen(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match app.navigation.screen() {
        Screen::Search => SearchScreen::new(app, &mut tui.search).render(frame, area),
        Screen::Loading => LoadingScreen {
            song: app.navigation.selected_song(),
            tick: spinner_frame,
        }
        .render(frame, area),
        Screen::Lyrics => LyricsView::new(&app.lyrics, &mut tui.lyrics).render(frame, area),
        Screen::StudyCards => StudyCardsView {
            cards: app.cards.as_ref(),
        }
        .render(frame, area),
        Screen::Quiz => QuizView {
            quiz: app.quiz.as_ref(),
        }
        .render(frame, area),
        Screen::Summary => SummaryView {
            result: app.navigation.quiz_result(),
            cards_learned: app.cards_learned(),
        }
        .render(frame, area),
    }
}

/// Key hints for the bottom line.
pub fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Search => " ↑↓ 이동 · Enter 선택 · Tab 필터 · Ctrl+R 새로고침 · Esc 종료",
        Screen::Loading => " Esc 취소 · Ctrl+C 종료",
        Screen::Lyrics => " ↑↓ 이동 · Space 선택 · Enter 학습 카드 · Ctrl+R 다시 불러오기 · Esc 검색",
        Screen::StudyCards => " Space 뒤집기 · ←→ 이동 · Enter 다음 · Esc 가사",
        Screen::Quiz => " 1-4/↑↓ 선택 · 입력 · Enter 다음 · Ctrl+C 종료",
        Screen::Summary => " Enter/n 새 곡 · r 퀴즈 다시 · c 카드 복습 · Ctrl+C 종료",
    }
}
