use tracing::{debug, info};

use crate::{
    backend::{BackendClient, Reply},
    messages::{Locale, Text},
    url::ChannelUrl,
};

/// The two things a user can ask for. They never run together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Subscribe,
    ResolveChannelId,
}

impl Action {
    fn not_found(self) -> Text {
        match self {
            Action::Subscribe => Text::SubscribeNotFound,
            Action::ResolveChannelId => Text::ResolveNotFound,
        }
    }

    fn succeeded(self) -> Text {
        match self {
            Action::Subscribe => Text::SubscribeSucceeded,
            Action::ResolveChannelId => Text::ResolveSucceeded,
        }
    }
}

/// A validated request that has already marked the form busy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    action: Action,
    url: ChannelUrl,
}

impl PendingRequest {
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn url(&self) -> &ChannelUrl {
        &self.url
    }

    pub async fn send(&self, client: &BackendClient) -> Reply {
        match self.action {
            Action::Subscribe => client.subscribe(&self.url).await,
            Action::ResolveChannelId => client.extract_channel_id(&self.url).await,
        }
    }
}

/// UI state of the subscription form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub url: String,
    pub busy: bool,
    pub channel_id: Option<String>,
    pub message: Option<String>,
    locale: Locale,
}

impl FormState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, text: Text) -> &'static str {
        text.localize(self.locale)
    }

    /// Validate the current input and mark the form busy.
    ///
    /// Returns `None` while another request is in flight, or when the URL is
    /// rejected (the rejection becomes the status message).
    pub fn begin(&mut self, action: Action) -> Option<PendingRequest> {
        if self.busy {
            debug!(?action, "ignoring action while a request is in flight");
            return None;
        }

        let url = match ChannelUrl::parse(&self.url) {
            Ok(url) => url,
            Err(err) => {
                debug!(?action, %err, "rejected channel URL");
                self.message = Some(self.text(err.text()).to_string());
                return None;
            }
        };

        self.busy = true;
        self.message = None;
        self.channel_id = None;

        Some(PendingRequest { action, url })
    }

    /// Apply the reply of the request started by [`Self::begin`].
    pub fn settle(&mut self, action: Action, reply: Reply) {
        self.busy = false;

        let message = match reply {
            Reply::Success { channel_id } | Reply::NestedSuccess { channel_id } => {
                info!(?action, %channel_id, "backend returned channel id");
                self.channel_id = Some(channel_id);
                self.text(action.succeeded()).to_string()
            }
            Reply::ApplicationError { message } => message,
            Reply::NotFound => self.text(action.not_found()).to_string(),
            Reply::TransportError { message } => {
                message.unwrap_or_else(|| self.text(Text::BackendUnreachable).to_string())
            }
        };

        self.message = Some(message);
    }

    /// Run one action end to end.
    ///
    /// Holds `&mut self` across the request, so UI code should call
    /// [`Self::begin`] and [`Self::settle`] around [`PendingRequest::send`]
    /// instead.
    pub async fn submit(&mut self, action: Action, client: &BackendClient) {
        if let Some(request) = self.begin(action) {
            let reply = request.send(client).await;
            self.settle(action, reply);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> FormState {
        FormState {
            url: url.to_string(),
            ..FormState::new(Locale::En)
        }
    }

    #[test]
    fn empty_url_never_starts_a_request() {
        let mut form = with_url("  ");

        assert_eq!(form.begin(Action::Subscribe), None);
        assert!(!form.busy);
        assert_eq!(form.message.as_deref(), Some("URL must not be empty"));
    }

    #[test]
    fn invalid_url_never_starts_a_request() {
        let mut form = with_url("ftp://youtube.com/x");

        assert_eq!(form.begin(Action::ResolveChannelId), None);
        assert!(!form.busy);
        assert_eq!(form.message.as_deref(), Some("URL is invalid"));
    }

    #[test]
    fn begin_clears_previous_result() {
        let mut form = with_url(" https://www.youtube.com/@example ");
        form.channel_id = Some("UCold".to_string());
        form.message = Some("old".to_string());

        let request = form.begin(Action::Subscribe).unwrap();

        assert!(form.busy);
        assert_eq!(form.channel_id, None);
        assert_eq!(form.message, None);
        assert_eq!(request.action(), Action::Subscribe);
        assert_eq!(request.url().as_str(), "https://www.youtube.com/@example");
    }

    #[test]
    fn second_action_while_busy_is_a_no_op() {
        let mut form = with_url("https://www.youtube.com/@example");
        form.begin(Action::Subscribe).unwrap();
        let before = form.clone();

        assert_eq!(form.begin(Action::ResolveChannelId), None);
        assert_eq!(form.begin(Action::Subscribe), None);
        assert_eq!(form, before);
    }

    #[test]
    fn subscribe_success() {
        let mut form = with_url("https://www.youtube.com/@example");
        form.begin(Action::Subscribe).unwrap();

        form.settle(
            Action::Subscribe,
            Reply::Success {
                channel_id: "UC123".to_string(),
            },
        );

        assert!(!form.busy);
        assert_eq!(form.channel_id.as_deref(), Some("UC123"));
        assert_eq!(
            form.message.as_deref(),
            Some("PubSubHubbub subscription succeeded!")
        );
    }

    #[test]
    fn subscribe_application_error_is_verbatim() {
        let mut form = with_url("https://www.youtube.com/@example");
        form.begin(Action::Subscribe).unwrap();

        form.settle(
            Action::Subscribe,
            Reply::ApplicationError {
                message: "quota exceeded".to_string(),
            },
        );

        assert!(!form.busy);
        assert_eq!(form.channel_id, None);
        assert_eq!(form.message.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn not_found_message_depends_on_action() {
        let mut form = with_url("https://www.youtube.com/@example");

        form.begin(Action::Subscribe).unwrap();
        form.settle(Action::Subscribe, Reply::NotFound);
        assert_eq!(
            form.message.as_deref(),
            Some("Channel id not found or subscription failed.")
        );

        form.begin(Action::ResolveChannelId).unwrap();
        form.settle(Action::ResolveChannelId, Reply::NotFound);
        assert_eq!(form.message.as_deref(), Some("Channel id not found."));
    }

    #[test]
    fn resolve_success() {
        let mut form = with_url("http://youtu.be/abc123");
        form.begin(Action::ResolveChannelId).unwrap();

        form.settle(
            Action::ResolveChannelId,
            Reply::NestedSuccess {
                channel_id: "UC999".to_string(),
            },
        );

        assert_eq!(form.channel_id.as_deref(), Some("UC999"));
        assert_eq!(form.message.as_deref(), Some("Channel ID retrieved!"));
    }

    #[test]
    fn transport_error_falls_back_to_generic_message() {
        let mut form = with_url("https://www.youtube.com/@example");

        form.begin(Action::Subscribe).unwrap();
        form.settle(Action::Subscribe, Reply::TransportError { message: None });
        assert!(!form.busy);
        assert_eq!(form.channel_id, None);
        assert_eq!(form.message.as_deref(), Some("Error calling backend"));

        form.begin(Action::ResolveChannelId).unwrap();
        form.settle(
            Action::ResolveChannelId,
            Reply::TransportError {
                message: Some("channel is private".to_string()),
            },
        );
        assert_eq!(form.message.as_deref(), Some("channel is private"));
    }

    #[test]
    fn vietnamese_locale() {
        let mut form = FormState::new(Locale::Vi);

        form.begin(Action::Subscribe);

        assert_eq!(form.message.as_deref(), Some("URL không được để trống"));
    }
}
