use std::sync::mpsc::{channel, Receiver, Sender};

use anyhow::Result;
use bk_utils::contact::ContactKind;
use tokio::sync::Mutex;

/// Confirmation-code delivery request, routed by the contact kind the
/// validation layer produced.
pub enum NotifyPayload {
    Email { to: String, code: String },
    Sms { to: String, code: String },
}

impl NotifyPayload {
    pub fn new(kind: &ContactKind, to: &str, code: &str) -> Self {
        match kind {
            ContactKind::Email => Self::Email {
                to: to.to_owned(),
                code: code.to_owned(),
            },
            ContactKind::PhoneNumber => Self::Sms {
                to: to.to_owned(),
                code: code.to_owned(),
            },
        }
    }
}

/// Placeholder sender: prints to stdout. Swap in a real SMTP transport
/// per project.
pub fn send_confirmation_email(email: &str, code: &str) {
    println!("Code has been sent to {email}\nCode: {code}");
}

/// Placeholder sender: prints to stdout. Swap in a real SMS gateway per
/// project.
pub fn send_sms(phone_number: &str, code: &str) {
    println!("Code has been sent to {phone_number}\nCode: {code}");
}

fn dispatch(payload: NotifyPayload) {
    match payload {
        NotifyPayload::Email { to, code } => send_confirmation_email(&to, &code),
        NotifyPayload::Sms { to, code } => send_sms(&to, &code),
    }
}

pub struct Notifier {
    channel_receiver: Mutex<Receiver<NotifyPayload>>,
}

impl Notifier {
    pub fn new() -> (Self, Sender<NotifyPayload>) {
        let (sender, receiver) = channel::<NotifyPayload>();

        (
            Self {
                channel_receiver: Mutex::new(receiver),
            },
            sender,
        )
    }

    pub fn send(&self, payload: NotifyPayload) {
        dispatch(payload);
    }

    pub async fn run(self) -> Result<()> {
        bk_log::info(Some("✉️"), "[Notifier] Starting worker");

        Ok(tokio::spawn((|| async {
            let channel_receiver = self.channel_receiver;

            loop {
                match channel_receiver.lock().await.recv() {
                    Ok(payload) => dispatch(payload),
                    Err(err) => {
                        eprintln!("{err}");
                        break;
                    }
                }
            }
        })())
        .await?)
    }
}
