//! Polling del thread di messaggi con un partner.
//!
//! Il server non fa push: un task in background riscarica il thread a
//! intervalli fissi e subito dopo ogni `refresh()` (es. dopo un invio locale).
//! L'ultimo thread scaricato è pubblicato su un canale `watch`.

use crate::error::ClientError;
use crate::models::{Message, NewMessage};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Sorgente del thread tra l'utente della sessione e un partner
pub trait ThreadSource {
    fn fetch_thread(
        &self,
        partner_id: i32,
    ) -> impl Future<Output = Result<Vec<Message>, ClientError>> + Send;
}

/// Destinazione dei messaggi inviati localmente
pub trait MessageSink {
    fn send_message(
        &self,
        message: &NewMessage,
    ) -> impl Future<Output = Result<Message, ClientError>> + Send;
}

pub struct ThreadPoller {
    partner_id: i32,
    refresh: Arc<Notify>,
    updates: watch::Receiver<Vec<Message>>,
    task: JoinHandle<()>,
}

impl ThreadPoller {
    /// Avvia il polling con l'intervallo di default
    pub fn start<S>(source: Arc<S>, partner_id: i32) -> Self
    where
        S: ThreadSource + Send + Sync + 'static,
    {
        Self::with_interval(source, partner_id, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_interval<S>(source: Arc<S>, partner_id: i32, every: Duration) -> Self
    where
        S: ThreadSource + Send + Sync + 'static,
    {
        let refresh = Arc::new(Notify::new());
        let (tx, updates) = watch::channel(Vec::new());

        let wake = refresh.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // il primo tick scatta subito
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = wake.notified() => {
                        ticker.reset();
                    }
                }

                match source.fetch_thread(partner_id).await {
                    Ok(messages) => {
                        debug!("Polled {} messages with partner {}", messages.len(), partner_id);
                        if tx.send(messages).is_err() {
                            break;
                        }
                    }
                    // nessun backoff: si riprova al prossimo tick
                    Err(e) => warn!("Polling thread with partner {} failed: {}", partner_id, e),
                }
            }
        });

        Self {
            partner_id,
            refresh,
            updates,
            task,
        }
    }

    pub fn partner_id(&self) -> i32 {
        self.partner_id
    }

    /// Forza un fetch immediato senza attendere il prossimo tick
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// Invia un messaggio e, se l'invio va a buon fine, riscarica subito il thread
    pub async fn send<K: MessageSink>(
        &self,
        sink: &K,
        message: &NewMessage,
    ) -> Result<Message, ClientError> {
        let sent = sink.send_message(message).await?;
        self.refresh();
        Ok(sent)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.updates.clone()
    }

    /// Ultimo thread scaricato (vuoto finché il primo fetch non va a buon fine)
    pub fn latest(&self) -> Vec<Message> {
        self.updates.borrow().clone()
    }

    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ThreadPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
