/// Implementation of `bcbp decode`.
///
/// Decodes the input with the options derived from the command-line
/// flags and prints either a human-readable summary or, with `--json`,
/// a JSON document built from local serde structs (the library types
/// stay serialization-free).
use anyhow::{Context, Result};
use bcbp_decoder::{BcbpDecoder, DecodeOptions};
use bcbp_types::{BoardingPass, Leg};
use serde::Serialize;

use crate::{DecodeArgs, load_input};

pub fn run(args: &DecodeArgs) -> Result<()> {
    let input = load_input(&args.input)?;
    let options = DecodeOptions {
        trim_whitespace: !args.keep_spaces,
        trim_leading_zeros: !args.keep_zeros,
        empty_string_is_none: !args.keep_empty,
        trace: args.trace,
        lenient_bag_tag_padding: args.lenient_bag_tags,
    };

    let pass = BcbpDecoder::decode_with(&input, &options).context("decode failed")?;

    if args.json {
        let doc = PassDoc::from_pass(&pass);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_summary(&pass);
    }
    Ok(())
}

// ── Human-readable summary ────────────────────────────────────────────────────

fn print_summary(pass: &BoardingPass) {
    println!(
        "{} ({} leg{})",
        pass.header.passenger_name,
        pass.legs.len(),
        if pass.legs.len() == 1 { "" } else { "s" }
    );
    for (index, leg) in pass.legs.iter().enumerate() {
        println!(
            "  leg {index}: {} {} {} -> {}  day {}  seat {}  status {}",
            leg.operating_carrier,
            leg.flight_number,
            leg.from_city,
            leg.to_city,
            leg.date_of_flight.day(),
            leg.seat_number.as_deref().unwrap_or("-"),
            leg.passenger_status,
        );
    }
    if let Some(unique) = &pass.unique {
        println!(
            "  version {}  issuer {}  bag tags {}",
            unique.version_number,
            unique.issuer_airline.as_deref().unwrap_or("-"),
            unique.bag_tags.len(),
        );
    }
    if !pass.security.is_absent() {
        let len = pass.security.payload.as_deref().map_or(0, str::len);
        match pass.security.type_code {
            Some(type_code) => println!("  security data: type {type_code}, {len} characters"),
            None => println!("  trailing data: {len} characters"),
        }
    }
}

// ── JSON document ─────────────────────────────────────────────────────────────

/// JSON shape for a decoded pass.
///
/// Deliberately a separate struct from [`BoardingPass`] so the wire
/// library does not grow serde derives it has no other use for.
#[derive(Serialize)]
struct PassDoc<'a> {
    format: char,
    legs_encoded: u8,
    passenger_name: &'a str,
    electronic_ticket_indicator: char,
    legs: Vec<LegDoc<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_number: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issuer_airline: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bag_tags: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    security_type: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    security_data: Option<&'a str>,
}

#[derive(Serialize)]
struct LegDoc<'a> {
    operating_carrier_pnr: &'a str,
    from_city: &'a str,
    to_city: &'a str,
    operating_carrier: &'a str,
    flight_number: &'a str,
    date_of_flight: u16,
    compartment_code: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    seat_number: Option<&'a str>,
    check_in_sequence: &'a str,
    passenger_status: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequent_flyer_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    airline_use: Option<&'a str>,
}

impl<'a> PassDoc<'a> {
    fn from_pass(pass: &'a BoardingPass) -> Self {
        Self {
            format: pass.header.format.as_char(),
            legs_encoded: pass.header.legs_encoded,
            passenger_name: &pass.header.passenger_name,
            electronic_ticket_indicator: pass.header.electronic_ticket_indicator,
            legs: pass.legs.iter().map(LegDoc::from_leg).collect(),
            version_number: pass.unique.as_ref().map(|u| u.version_number),
            issuer_airline: pass
                .unique
                .as_ref()
                .and_then(|u| u.issuer_airline.as_deref()),
            bag_tags: pass
                .unique
                .as_ref()
                .map(|u| u.bag_tags.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            security_type: pass.security.type_code,
            security_data: pass.security.payload.as_deref(),
        }
    }
}

impl<'a> LegDoc<'a> {
    fn from_leg(leg: &'a Leg) -> Self {
        Self {
            operating_carrier_pnr: &leg.operating_carrier_pnr,
            from_city: &leg.from_city,
            to_city: &leg.to_city,
            operating_carrier: &leg.operating_carrier,
            flight_number: &leg.flight_number,
            date_of_flight: leg.date_of_flight.day(),
            compartment_code: leg.compartment_code,
            seat_number: leg.seat_number.as_deref(),
            check_in_sequence: &leg.check_in_sequence,
            passenger_status: leg.passenger_status,
            document_number: leg.conditional.document_number.as_deref(),
            frequent_flyer_number: leg.conditional.frequent_flyer_number.as_deref(),
            airline_use: leg.conditional.airline_use.as_deref(),
        }
    }
}
