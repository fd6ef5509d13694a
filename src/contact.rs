//! Contact links and the outbound WhatsApp booking message.

use crate::pricing::{format_money, PetHairLevel, Quote};

/// WhatsApp click-to-chat base URL
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Google Maps search URL
pub const MAPS_BASE_URL: &str = "https://www.google.com/maps";

const BOOKING_GREETING: &str = "Hola, quiero agendar un servicio a domicilio con AureOn.";
const BOOKING_CLOSING: &str = "¿Me confirmas disponibilidad y horario para agendar?";

/// Deep link opening a chat with `recipient` and `message` pre-filled.
pub fn whatsapp_link(recipient: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        recipient,
        urlencoding::encode(message)
    )
}

/// Maps link pinned to exact coordinates.
pub fn maps_link(lat: f64, lng: f64) -> String {
    format!("{}?q={},{}", MAPS_BASE_URL, lat, lng)
}

/// Extras of a quote as they appear in the booking message
pub fn booking_extras(quote: &Quote) -> Vec<String> {
    let mut extras = Vec::new();
    if quote.seat_surcharge > rust_decimal::Decimal::ZERO {
        extras.push(format!(
            "Retiro de asientos (+{})",
            format_money(quote.seat_surcharge)
        ));
    }
    match quote.pet_hair_level() {
        Some(PetHairLevel::Moderado) => extras.push(format!(
            "Pelo de mascota moderado (+{})",
            format_money(quote.pet_hair_surcharge)
        )),
        Some(PetHairLevel::Excesivo) => extras.push(format!(
            "Pelo de mascota excesivo (+{})",
            format_money(quote.pet_hair_surcharge)
        )),
        _ => {}
    }
    if quote.extended_zone {
        extras.push("Área extendida (confirmar costo)".to_string());
    }
    extras
}

/// Fill the booking template for a priced quote.
///
/// Zone and note lines are only added when they have content.
pub fn compose_booking_message(quote: &Quote, zone: &str, note: &str) -> String {
    let extras = booking_extras(quote);
    let extras_line = if extras.is_empty() {
        "Ninguno".to_string()
    } else {
        extras.join(", ")
    };

    let mut message = format!(
        "{greeting}\n\n\
         • Vehículo: {vehicle}\n\
         • Paquete: {package} (A domicilio)\n\
         • Suciedad: {dirt}\n\
         • Pago: {payment}\n\
         • Extras: {extras}\n\
         • Total estimado: {total}\n",
        greeting = BOOKING_GREETING,
        vehicle = quote.vehicle,
        package = quote.package,
        dirt = quote.dirt_level,
        payment = quote.payment,
        extras = extras_line,
        total = quote.total_display(),
    );

    let zone = zone.trim();
    if !zone.is_empty() {
        message.push_str(&format!("• Zona/Colonia: {}\n", zone));
    }
    let note = note.trim();
    if !note.is_empty() {
        message.push_str(&format!("• Notas: {}\n", note));
    }

    message.push('\n');
    message.push_str(BOOKING_CLOSING);
    message
}
