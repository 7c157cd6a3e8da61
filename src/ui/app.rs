use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use adw::prelude::*;
use gettextrs::gettext;
use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::gdk;
use gtk4::prelude::*;
use libadwaita as adw;

use super::render::draw_board;
use super::timer::{GlibScheduler, Mailbox};
use crate::config::{CONFIG_FILE_NAME, GameConfig};
use crate::game::{Board, BoardView, PointerOutcome, Session};

pub const APP_ID: &str = "io.github.memory_match.MemoryMatch";

type SharedSession = Rc<RefCell<Session<GlibScheduler>>>;

/// Default config location when the environment doesn't name one.
pub fn user_config_path() -> PathBuf {
    glib::user_config_dir().join("memory-match").join(CONFIG_FILE_NAME)
}

pub fn run(config: GameConfig) -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        let board = match Board::new(config.clone()) {
            Ok(board) => board,
            Err(err) => {
                tracing::error!(error = %err, "cannot build board");
                app.quit();
                return;
            }
        };

        let mailbox = Mailbox::default();
        let session: SharedSession = Rc::new(RefCell::new(Session::new(
            board,
            GlibScheduler::new(mailbox.clone()),
        )));

        let canvas = build_canvas(&session, &mailbox);
        install_actions(app, &session, &canvas);

        let menu = gio::Menu::new();
        menu.append(Some(&gettext("Restart")), Some("app.restart"));
        menu.append(Some(&gettext("Switch Level")), Some("app.toggle-level"));
        menu.append(Some(&gettext("Quit")), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu)
            .build();

        let header = adw::HeaderBar::new();
        header.add_css_class("flat");
        header.pack_end(&menu_button);

        let toolbar = adw::ToolbarView::new();
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&canvas));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title(gettext("Memory Match"))
            .resizable(false)
            .content(&toolbar)
            .build();
        win.present();
    });

    app.run()
}

fn build_canvas(session: &SharedSession, mailbox: &Mailbox) -> gtk::DrawingArea {
    let canvas = gtk::DrawingArea::new();
    canvas.set_halign(gtk::Align::Center);
    canvas.set_valign(gtk::Align::Center);
    fit_canvas(&canvas, &session.borrow().view());

    let state_draw = session.clone();
    canvas.set_draw_func(move |_, cr, _, _| {
        let view = state_draw.borrow().view();
        if let Err(err) = draw_board(cr, &view) {
            tracing::warn!(error = %err, "drawing failed");
        }
    });

    let click = gtk::GestureClick::new();
    click.set_button(gdk::BUTTON_PRIMARY);
    click.connect_pressed({
        let session = session.clone();
        let canvas = canvas.clone();
        move |_, _, x, y| {
            let outcome = session.borrow_mut().pointer_down(x, y);
            if let PointerOutcome::LevelToggled(_) = outcome {
                fit_canvas(&canvas, &session.borrow().view());
            }
            canvas.queue_draw();
        }
    });
    canvas.add_controller(click);

    // Fired timers are applied here, on the frame clock, never from the
    // timeout callbacks themselves.
    let state_tick = session.clone();
    let mailbox = mailbox.clone();
    canvas.add_tick_callback(move |canvas, _| {
        let messages = mailbox.drain();
        if !messages.is_empty() {
            let mut session = state_tick.borrow_mut();
            for message in messages {
                session.deliver(message);
            }
        }
        canvas.queue_draw();
        glib::ControlFlow::Continue
    });

    canvas
}

fn fit_canvas(canvas: &gtk::DrawingArea, view: &BoardView) {
    canvas.set_content_width(view.canvas_width.round() as i32);
    canvas.set_content_height(view.canvas_height.round() as i32);
}

fn install_actions(app: &adw::Application, session: &SharedSession, canvas: &gtk::DrawingArea) {
    let restart_action = SimpleAction::new("restart", None);
    restart_action.connect_activate({
        let session = session.clone();
        let canvas = canvas.clone();
        move |_, _| {
            session.borrow_mut().restart();
            canvas.queue_draw();
        }
    });
    app.add_action(&restart_action);

    let toggle_action = SimpleAction::new("toggle-level", None);
    toggle_action.connect_activate({
        let session = session.clone();
        let canvas = canvas.clone();
        move |_, _| {
            session.borrow_mut().toggle_level();
            fit_canvas(&canvas, &session.borrow().view());
            canvas.queue_draw();
        }
    });
    app.add_action(&toggle_action);

    let quit_action = SimpleAction::new("quit", None);
    quit_action.connect_activate({
        let app = app.clone();
        move |_, _| app.quit()
    });
    app.add_action(&quit_action);

    app.set_accels_for_action("app.restart", &["<Control>r"]);
    app.set_accels_for_action("app.toggle-level", &["<Control>l"]);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}
