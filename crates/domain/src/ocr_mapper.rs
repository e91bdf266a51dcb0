use crate::document::NewDocument;
use crate::shared::entity::ID;
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

pub const UNTITLED: &str = "제목없음";

#[derive(Error, Debug, PartialEq)]
pub enum OcrMapError {
    #[error("The ocr text is empty")]
    EmptyText,
    #[error("The due date is missing or could not be parsed. Raw value: {raw:?}")]
    MissingDueDate { raw: Option<String> },
    #[error("The amount: `{0}` does not fit into a whole number")]
    AmountOutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    ClassificationLabel,
    Title,
    Amount,
    Partner,
    Bank,
    AccountNumber,
    PartnerNumber,
    Due,
}

fn field_for_key(key: &str) -> Option<Field> {
    let field = match normalize_key(key).as_str() {
        "서류종류" => Field::ClassificationLabel,
        "제목" => Field::Title,
        "거래금액" => Field::Amount,
        "거래대상" => Field::Partner,
        "계좌은행" => Field::Bank,
        "계좌번호" => Field::AccountNumber,
        "거래대상계좌번호" => Field::PartnerNumber,
        "지불기일" => Field::Due,
        _ => return None,
    };
    Some(field)
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect()
}

/// Maps the eight `key : value` lines produced for a scanned financial
/// document into a `NewDocument`.
///
/// Unknown keys are ignored and a repeated key overrides the earlier line.
/// The whole text is kept as the content of the document.
pub fn map_ocr_text(user_id: ID, text: &str) -> Result<NewDocument, OcrMapError> {
    if text.trim().is_empty() {
        return Err(OcrMapError::EmptyText);
    }

    let fields = parse_fields(text);
    let get = |field: Field| fields.get(&field).map(|v| v.as_str()).unwrap_or("");

    let title = match get(Field::Title).trim() {
        "" => UNTITLED.to_string(),
        title => title.to_string(),
    };
    let amount = parse_amount(get(Field::Amount))?;
    let due = fields
        .get(&Field::Due)
        .and_then(|raw| parse_due_date(raw))
        .ok_or_else(|| OcrMapError::MissingDueDate {
            raw: fields.get(&Field::Due).cloned(),
        })?;

    Ok(NewDocument {
        user_id,
        title,
        amount,
        partner: get(Field::Partner).to_string(),
        bank: get(Field::Bank).to_string(),
        account_number: get(Field::AccountNumber).to_string(),
        partner_number: get(Field::PartnerNumber).to_string(),
        due,
        classification_id: classification_id(get(Field::ClassificationLabel)),
        content: Some(text.to_string()),
        path: None,
    })
}

fn parse_fields(text: &str) -> HashMap<Field, String> {
    let mut fields = HashMap::new();
    for line in text.lines() {
        let (key, value) = match line.split_once(':') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => continue,
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        if let Some(field) = field_for_key(key) {
            fields.insert(field, value.to_string());
        }
    }
    fields
}

/// Keeps only the digits, `12,345원` becomes 12345. No digits at all is 0.
pub fn parse_amount(raw: &str) -> Result<i64, OcrMapError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| OcrMapError::AmountOutOfRange(raw.to_string()))
}

/// Accepts `YYYY-M-D` with `-`, `.` or `/` as separator, `YYYYMMDD` and `YY-MM-DD`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let s: String = raw
        .trim()
        .chars()
        .map(|c| if c == '.' || c == '/' { '-' } else { c })
        .collect();

    let parts = s.split('-').collect::<Vec<_>>();
    let dashed_with_year_of = |year_len: usize| {
        parts.len() == 3
            && is_digits(parts[0], year_len, year_len)
            && is_digits(parts[1], 1, 2)
            && is_digits(parts[2], 1, 2)
    };

    if dashed_with_year_of(4) {
        // A full date that does not exist is not retried with the other formats
        return ymd(parts[0], parts[1], parts[2]);
    }

    if is_digits(&s, 8, 8) {
        if let Some(date) = ymd(&s[0..4], &s[4..6], &s[6..8]) {
            return Some(date);
        }
    }

    if dashed_with_year_of(2) {
        let yy: i32 = parts[0].parse().ok()?;
        let year = if yy >= 69 { 1900 + yy } else { 2000 + yy };
        return NaiveDate::from_ymd_opt(year, parts[1].parse().ok()?, parts[2].parse().ok()?);
    }

    None
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Unrecognized labels fall back to 0.
pub fn classification_id(label: &str) -> u8 {
    let normalized: String = label
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '/'))
        .collect();

    match normalized.as_str() {
        "정기구독및납부" => 0,
        "송장및세금계산서" | "세금계산서" | "송장" | "청구서" => 1,
        // "밀" is a frequent misread of "및"
        "이체및송금전표" | "이체밀송금전표" | "송금전표" => 2,
        "은행거래내역서" => 3,
        "카드명세서" | "신용카드명세서" => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_maps_a_card_statement() {
        let text = "제목 : 전기료\n거래금액 : 12,345원\n지불기일 : 2024-03-10\n서류 종류 : 카드명세서";
        let user_id = ID::default();
        let doc = map_ocr_text(user_id, text).unwrap();
        assert_eq!(doc.user_id, user_id);
        assert_eq!(doc.title, "전기료");
        assert_eq!(doc.amount, 12345);
        assert_eq!(doc.due, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(doc.classification_id, 4);
        assert_eq!(doc.content.as_deref(), Some(text));
        assert_eq!(doc.partner, "");
    }

    #[test]
    fn it_maps_all_eight_lines() {
        let text = "서류 종류 : 이체 밀 송금 전표
제목 : 월세
거래금액 : 500000
거래대상 : 홍길동
계좌 은행 : 국민은행
계좌번호 : 123-456-789
거래대상 계좌번호 : ****-1234
지불기일 : 2024.3.1";
        let doc = map_ocr_text(ID::default(), text).unwrap();
        assert_eq!(doc.classification_id, 2);
        assert_eq!(doc.title, "월세");
        assert_eq!(doc.amount, 500000);
        assert_eq!(doc.partner, "홍길동");
        assert_eq!(doc.bank, "국민은행");
        assert_eq!(doc.account_number, "123-456-789");
        assert_eq!(doc.partner_number, "****-1234");
        assert_eq!(doc.due, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn later_duplicate_wins_and_blank_title_is_replaced() {
        let text = "제목 :   \n지불기일 : 2024-01-01\n지불기일 : 2024-02-02\n메모 : 무시";
        let doc = map_ocr_text(ID::default(), text).unwrap();
        assert_eq!(doc.title, UNTITLED);
        assert_eq!(doc.due, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
        assert_eq!(doc.amount, 0);
        assert_eq!(doc.classification_id, 0);
    }

    #[test]
    fn it_rejects_empty_text() {
        assert_eq!(map_ocr_text(ID::default(), "  \n "), Err(OcrMapError::EmptyText));
    }

    #[test]
    fn it_rejects_missing_or_invalid_due() {
        assert_eq!(
            map_ocr_text(ID::default(), "제목 : 전기료"),
            Err(OcrMapError::MissingDueDate { raw: None })
        );
        assert_eq!(
            map_ocr_text(ID::default(), "제목 : 전기료\n지불기일 : 2024-02-30"),
            Err(OcrMapError::MissingDueDate {
                raw: Some("2024-02-30".into())
            })
        );
    }

    #[test]
    fn it_parses_secondary_date_formats() {
        assert_eq!(parse_due_date("20240310"), NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(parse_due_date("24-03-10"), NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(parse_due_date("99/12/31"), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(parse_due_date("2024/3/9"), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(parse_due_date("10 March"), None);
    }

    #[test]
    fn it_classifies_labels() {
        assert_eq!(classification_id("정기구독 및 납부"), 0);
        assert_eq!(classification_id("송장 및 세금 계산서"), 1);
        assert_eq!(classification_id("청구서"), 1);
        assert_eq!(classification_id("이체 및 송금 전표"), 2);
        assert_eq!(classification_id("은행 거래내역서"), 3);
        assert_eq!(classification_id("신용카드 명세서"), 4);
        assert_eq!(classification_id("서류가 분류되지 않았습니다."), 0);
    }

    #[test]
    fn amount_keeps_digits_only() {
        assert_eq!(parse_amount("₩ 1,000,000"), Ok(1_000_000));
        assert_eq!(parse_amount(""), Ok(0));
        assert!(parse_amount("99999999999999999999").is_err());
    }
}
