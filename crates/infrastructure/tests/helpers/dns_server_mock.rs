#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock answers every question it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with these A records (empty means NODATA).
    Answer(Vec<Ipv4Addr>),
    NxDomain,
    ServFail,
    /// Never replies.
    Silent,
    /// TC bit over UDP, the full answer over TCP.
    Truncated(Vec<Ipv4Addr>),
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Listens on an ephemeral UDP port, and on the same TCP port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&buf[..len], &behavior, false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = Self::build_response(&query, &behavior, true) {
                                    let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(query: &[u8], behavior: &MockBehavior, over_tcp: bool) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let none: &[Ipv4Addr] = &[];
        let (rcode, truncated, answers) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Answer(ips) => (0u8, false, ips.as_slice()),
            MockBehavior::NxDomain => (3, false, none),
            MockBehavior::ServFail => (2, false, none),
            MockBehavior::Truncated(ips) if over_tcp => (0, false, ips.as_slice()),
            MockBehavior::Truncated(_) => (0, true, none),
        };

        // Only A questions get address answers.
        let qtype_a = query.len() >= 4 && query[query.len() - 4..query.len() - 2] == [0x00, 0x01];
        let answers = if qtype_a { answers } else { none };

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        response.push(if truncated { 0x83 } else { 0x81 });
        response.push(0x80 | rcode);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&query[12..]);

        for ip in answers {
            response.extend_from_slice(&[
                0xc0, 0x0c, // name pointer to the question
                0x00, 0x01, // A
                0x00, 0x01, // IN
                0x00, 0x00, 0x00, 0x3c, // TTL 60
                0x00, 0x04,
            ]);
            response.extend_from_slice(&ip.octets());
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
