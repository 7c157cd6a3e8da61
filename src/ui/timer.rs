use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use gtk4::glib;

use crate::game::{Scheduler, TurnMessage};

/// Messages whose timers have fired, waiting for the next frame tick.
#[derive(Clone, Default)]
pub struct Mailbox(Rc<RefCell<VecDeque<TurnMessage>>>);

impl Mailbox {
    fn push(&self, message: TurnMessage) {
        self.0.borrow_mut().push_back(message);
    }

    pub fn drain(&self) -> Vec<TurnMessage> {
        self.0.borrow_mut().drain(..).collect()
    }
}

pub struct GlibScheduler {
    mailbox: Mailbox,
}

impl GlibScheduler {
    pub fn new(mailbox: Mailbox) -> Self {
        Self { mailbox }
    }
}

impl Scheduler for GlibScheduler {
    fn schedule(&mut self, delay: Duration, message: TurnMessage) {
        let mailbox = self.mailbox.clone();
        glib::timeout_add_local_once(delay, move || mailbox.push(message));
    }
}
