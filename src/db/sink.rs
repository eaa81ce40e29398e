//! Notification sink backed by the local database.
//!
//! The OS delivery layer is out of scope; persisting the registered set
//! keeps cancel-and-reschedule observable (`notify --list`) and gives the
//! host something concrete to hand to a platform notifier.

use crate::core::notify::{NotificationSink, PendingNotification};
use crate::db::queries;
use crate::errors::AppResult;
use rusqlite::Connection;

pub struct DbNotificationSink<'a> {
    conn: &'a Connection,
}

impl<'a> DbNotificationSink<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl NotificationSink for DbNotificationSink<'_> {
    fn cancel_all(&mut self) -> AppResult<()> {
        queries::clear_notifications(self.conn)
    }

    fn schedule(&mut self, n: &PendingNotification) -> AppResult<()> {
        queries::insert_notification(self.conn, n)
    }
}
