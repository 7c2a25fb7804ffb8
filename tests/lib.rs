// Shared stubs for the behavior suites
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

pub use tickertape_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Stands in for the proxy endpoint: answers every request with one canned
/// outcome and records the URLs it was asked for.
pub struct ProxyStub {
    response: Result<HttpResponse, HttpError>,
    urls: Mutex<Vec<String>>,
}

impl ProxyStub {
    pub fn answering(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().expect("url store should not be poisoned").clone()
    }
}

impl HttpClient for ProxyStub {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.urls
            .lock()
            .expect("url store should not be poisoned")
            .push(request.url);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}
