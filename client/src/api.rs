//! Client HTTP per le API BetaLink

use crate::error::ClientError;
use crate::models::{
    AuthResponse, Conversation, Credentials, ErrorBody, Message, NewMessage, Signup,
};
use crate::poller::{MessageSink, ThreadSource};
use crate::session::Session;
use reqwest::{RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        })
    }

    /// Riusa una sessione già ottenuta (es. token salvato in precedenza)
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.header(header::AUTHORIZATION, session.bearer()))
    }

    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        let auth: AuthResponse = parse(response).await?;
        info!("Logged in as user {}", auth.user.id);
        Ok(self.session.insert(Session::new(auth.token, auth.user)))
    }

    #[instrument(skip(self, body), fields(email = %body.email))]
    pub async fn signup(&mut self, body: &Signup) -> Result<&Session, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/signup"))
            .json(body)
            .send()
            .await?;
        let auth: AuthResponse = parse(response).await?;
        info!("Registered user {}", auth.user.id);
        Ok(self.session.insert(Session::new(auth.token, auth.user)))
    }

    #[instrument(skip(self))]
    pub async fn conversations(&self) -> Result<Vec<Conversation>, ClientError> {
        let request = self.authorized(self.http.get(self.url("/chat/conversations")))?;
        let conversations: Vec<Conversation> = parse(request.send().await?).await?;
        debug!("Fetched {} conversations", conversations.len());
        Ok(conversations)
    }

    /// Scarica il thread con `partner_id`. Lato server i messaggi del partner vengono segnati come letti.
    #[instrument(skip(self))]
    pub async fn thread(&self, partner_id: i32) -> Result<Vec<Message>, ClientError> {
        let request = self.authorized(self.http.get(self.url(&format!("/chat/{}", partner_id))))?;
        let messages: Vec<Message> = parse(request.send().await?).await?;
        debug!("Fetched {} messages", messages.len());
        Ok(messages)
    }

    #[instrument(skip(self, message), fields(recipient_id = message.recipient_id))]
    pub async fn send(&self, message: &NewMessage) -> Result<Message, ClientError> {
        let request = self.authorized(self.http.post(self.url("/chat")))?;
        let sent: Message = parse(request.json(message).send().await?).await?;
        info!("Message {} sent", sent.message_id);
        Ok(sent)
    }
}

impl ThreadSource for ApiClient {
    async fn fetch_thread(&self, partner_id: i32) -> Result<Vec<Message>, ClientError> {
        self.thread(partner_id).await
    }
}

impl MessageSink for ApiClient {
    async fn send_message(&self, message: &NewMessage) -> Result<Message, ClientError> {
        self.send(message).await
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    warn!("Request failed with {}: {}", status, message);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
