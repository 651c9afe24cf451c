//! Response formatting.
//!
//! Pure functions turning a lookup result and the original query into the text
//! (and, for phone numbers, the action links) sent back to the user. The same
//! inputs always produce the same output.

use crate::domain::{digits_only, QueryKind};
use crate::models::{ActionLink, BreachReport, IpReport, LookupResult, PhoneReport, RenderedResponse};

/// Shown whenever a lookup failed, whatever the cause.
pub const LOOKUP_FAILED: &str = "⚠️ Ошибка проверки";

/// Shown when the query matched no known shape.
pub const INVALID_FORMAT: &str = "❌ Неверный формат ввода";

/// Greeting listing the accepted inputs.
pub const WELCOME: &str = "🔍 OSINT Bot\n\n\
Отправьте:\n\
- Номер телефона (+79123456789)\n\
- IP-адрес\n\
- Email для проверки";

/// Render the reply for a classified query.
///
/// A result whose variant does not belong to `kind` is treated as a failed lookup.
pub fn render(kind: QueryKind, result: &LookupResult, query: &str) -> RenderedResponse {
    match (kind, result) {
        (QueryKind::Unrecognized, _) => render_unrecognized(),
        (_, LookupResult::Error) => RenderedResponse::text(LOOKUP_FAILED),
        (QueryKind::Phone, LookupResult::Phone(report)) => render_phone(query, report),
        (QueryKind::IpAddress, LookupResult::Ip(report)) => render_ip(query, report),
        (QueryKind::Email, LookupResult::Email(report)) => render_email(query, report),
        _ => RenderedResponse::text(LOOKUP_FAILED),
    }
}

/// Reply for input that is neither a phone number, an IPv4 address nor an email.
pub fn render_unrecognized() -> RenderedResponse {
    RenderedResponse::text(INVALID_FORMAT)
}

/// Reply to the start command.
pub fn render_welcome() -> RenderedResponse {
    RenderedResponse::text(WELCOME)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Да"
    } else {
        "Нет"
    }
}

fn render_phone(query: &str, report: &PhoneReport) -> RenderedResponse {
    let text = format!(
        "📱 Номер: {}\n🌍 Страна: {}\n📶 Оператор: {}\n✅ Валидность: {}",
        query,
        report.country,
        report.operator,
        yes_no(report.is_mobile)
    );
    RenderedResponse::with_actions(text, phone_actions(query))
}

/// Messaging-app deep links for a phone number.
pub fn phone_actions(phone: &str) -> Vec<ActionLink> {
    let digits = digits_only(phone);
    vec![
        ActionLink::new("WhatsApp", format!("https://wa.me/{}", digits)),
        ActionLink::new("Telegram", format!("tg://resolve?phone={}", digits)),
    ]
}

fn render_ip(query: &str, report: &IpReport) -> RenderedResponse {
    RenderedResponse::text(format!(
        "🖥️ IP: {}\n🌍 Страна: {}\n🏙️ Город: {}\n📶 Провайдер: {}",
        query, report.country, report.city, report.isp
    ))
}

fn render_email(query: &str, report: &BreachReport) -> RenderedResponse {
    let mut text = format!("📧 Email: {}\n", query);

    if report.is_empty() {
        text.push_str("✅ Не найден в известных утечках");
    } else {
        text.push_str(&format!("⚠️ Найден в {} утечках:\n", report.count()));
        let items: Vec<String> = report.names().iter().map(|b| format!("├ {}", b)).collect();
        text.push_str(&items.join("\n"));
    }

    RenderedResponse::text(text)
}
