use crate::config::FrontendConfig;
use rocket::local::asynchronous::Client;

pub(crate) async fn frontend_client(api_url: &str) -> Client {
    let config = FrontendConfig::resolve(None, Some(api_url.to_string()));
    Client::tracked(crate::frontend::rocket(&config))
        .await
        .expect("valid client")
}

/// Serves `body` with `status` to every connection; returns its base URL.
pub(crate) async fn stub_backend(status: u16, body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    let response = format!(
        "HTTP/1.1 {status} STUB\r\nConnection: close\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };

            let response = response.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = tokio::io::AsyncReadExt::read(&mut socket, &mut buf).await;
                let _ = tokio::io::AsyncWriteExt::write_all(&mut socket, response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub(crate) async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
