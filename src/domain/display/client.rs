//! Display targets: the Awtrix device over HTTP.

use super::wire::AwtrixApp;
use super::{CustomApp, Notification};
use crate::error::HttpError;
use crate::http::AwtrixHttp;

/// Something that accepts rendered apps and notifications.
#[allow(async_fn_in_trait)]
pub trait DisplaySink {
    /// Replace the custom app `name` with `app` in a single update.
    async fn push_app(&self, name: &str, app: &CustomApp) -> Result<(), HttpError>;

    async fn notify(&self, notification: &Notification) -> Result<(), HttpError>;
}

/// An Awtrix pixel-matrix display.
pub struct Awtrix {
    http: AwtrixHttp,
}

impl Awtrix {
    pub fn new(http: AwtrixHttp) -> Self {
        Self { http }
    }
}

impl DisplaySink for Awtrix {
    async fn push_app(&self, name: &str, app: &CustomApp) -> Result<(), HttpError> {
        self.http.post_custom_app(name, &AwtrixApp::from(app)).await
    }

    async fn notify(&self, notification: &Notification) -> Result<(), HttpError> {
        self.http
            .post_notification(&AwtrixApp::from(notification))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::display::DrawCommand;
    use crate::shared::Color;

    #[test]
    fn test_unreachable_device_is_a_transport_error() {
        // Nothing listens on port 1.
        let display = Awtrix::new(AwtrixHttp::new("127.0.0.1:1").unwrap());
        let app = CustomApp::new(vec![DrawCommand::text(0, 1, "23¢", Color::WHITE)]);

        let err = tokio_test::block_on(display.push_app("tibberPrices", &app)).unwrap_err();
        assert!(matches!(err, HttpError::Reqwest(_)));

        let err = tokio_test::block_on(display.notify(&Notification::new("hi"))).unwrap_err();
        assert!(matches!(err, HttpError::Reqwest(_)));
    }
}
