use hub_core::notification::{Notification, NotificationVariant, Notifier};
use hub_core::user::User;

/// Prints notifications as toast-like lines.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => {
                println!("[{}] {}", notification.title, notification.description)
            }
            NotificationVariant::Destructive => {
                eprintln!("[{}] {}", notification.title, notification.description)
            }
        }
    }
}

pub fn print_user(user: &User) {
    println!(
        "{:<12} {:<16} {:<30} {:?}",
        user.id, user.nickname, user.email, user.role
    );
}
