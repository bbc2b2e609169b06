use dnscheck_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

/// The parts of a server reply that matter for comparison.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    /// Answers of the requested type, in the order the server sent them.
    pub answers: Vec<String>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_nodata(&self) -> bool {
        self.rcode == ResponseCode::NoError && self.answers.is_empty()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Keeps only records of `record_type`; an `A` question answered through
    /// a CNAME chain yields the addresses, not the chain.
    pub fn parse(response_bytes: &[u8], record_type: RecordType) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut answers = Vec::new();
        for record in message.answers() {
            match (record_type, record.data()) {
                (RecordType::A, RData::A(a)) => answers.push(a.0.to_string()),
                (RecordType::CNAME, RData::CNAME(target)) => answers.push(target.to_utf8()),
                _ => {}
            }
        }

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers,
        };

        debug!(
            rcode = ?response.rcode,
            answers = response.answers.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{MessageType, OpCode, Query};
    use hickory_proto::rr::rdata::{A, CNAME};
    use hickory_proto::rr::{Name, Record, RecordType as HickoryRecordType};
    use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    fn encode(message: &Message) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();
        buf
    }

    fn response_with_chain() -> Vec<u8> {
        let name = Name::from_str("www.example.com.").unwrap();
        let target = Name::from_str("edge.example.net.").unwrap();

        let mut message = Message::new(7, MessageType::Response, OpCode::Query);
        message.add_query(Query::query(name.clone(), HickoryRecordType::A));
        message.add_answer(Record::from_rdata(name, 60, RData::CNAME(CNAME(target.clone()))));
        message.add_answer(Record::from_rdata(
            target.clone(),
            60,
            RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
        ));
        message.add_answer(Record::from_rdata(
            target,
            60,
            RData::A(A(Ipv4Addr::new(93, 184, 216, 35))),
        ));
        encode(&message)
    }

    #[test]
    fn test_a_answers_skip_cname_chain() {
        let response = ResponseParser::parse(&response_with_chain(), RecordType::A).unwrap();

        assert_eq!(response.id, 7);
        assert_eq!(response.answers, vec!["93.184.216.34", "93.184.216.35"]);
        assert!(!response.is_nodata());
    }

    #[test]
    fn test_cname_answers() {
        let response = ResponseParser::parse(&response_with_chain(), RecordType::CNAME).unwrap();
        assert_eq!(response.answers, vec!["edge.example.net."]);
    }

    #[test]
    fn test_nxdomain() {
        let mut message = Message::new(9, MessageType::Response, OpCode::Query);
        message.set_response_code(ResponseCode::NXDomain);

        let response = ResponseParser::parse(&encode(&message), RecordType::A).unwrap();
        assert!(response.is_nxdomain());
        assert!(!response.is_nodata());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = ResponseParser::parse(&[0x01, 0x02, 0x03], RecordType::A);
        assert!(matches!(result, Err(DomainError::InvalidDnsResponse(_))));
    }
}
