/// Implementation of `bcbp inspect`.
///
/// Decodes the pass with default options and prints every field,
/// grouped the way the format nests them: header, then each leg's
/// mandatory and conditional fields, then the unique conditional
/// block and the trailer. `--leg N` narrows the output to one leg.
use anyhow::{Context, Result, anyhow};
use bcbp_decoder::BcbpDecoder;
use bcbp_types::{BoardingPass, Leg};

use crate::{InspectArgs, load_input};

pub fn run(args: &InspectArgs) -> Result<()> {
    let input = load_input(&args.input)?;
    let pass = BcbpDecoder::decode(&input).context("decode failed")?;

    if let Some(index) = args.leg {
        let leg = pass
            .legs
            .get(index)
            .ok_or_else(|| anyhow!("leg {index} out of range (pass has {})", pass.legs.len()))?;
        print_leg(index, leg);
        return Ok(());
    }

    print_header(&pass);
    for (index, leg) in pass.legs.iter().enumerate() {
        print_leg(index, leg);
    }
    print_trailer(&pass);
    Ok(())
}

fn print_header(pass: &BoardingPass) {
    println!("header");
    println!("  format code            {}", pass.header.format.as_char());
    println!("  legs encoded           {}", pass.header.legs_encoded);
    println!("  passenger name         {:?}", pass.header.passenger_name);
    println!(
        "  electronic ticket      {:?}",
        pass.header.electronic_ticket_indicator
    );
}

fn print_leg(index: usize, leg: &Leg) {
    println!("leg {index}");
    println!("  PNR                    {:?}", leg.operating_carrier_pnr);
    println!("  from / to              {} -> {}", leg.from_city, leg.to_city);
    println!("  operating carrier      {:?}", leg.operating_carrier);
    println!("  flight number          {:?}", leg.flight_number);
    println!("  date of flight (day)   {}", leg.date_of_flight.day());
    println!("  compartment            {:?}", leg.compartment_code);
    println!("  seat                   {}", display_opt(&leg.seat_number));
    println!("  check-in sequence      {:?}", leg.check_in_sequence);
    println!("  passenger status       {:?}", leg.passenger_status);
    println!("  conditional size       {}", leg.conditional_size);

    let c = &leg.conditional;
    let rows: [(&str, &Option<String>); 11] = [
        ("airline numeric code", &c.airline_numeric_code),
        ("document number", &c.document_number),
        ("selectee", &c.selectee),
        ("intl doc verification", &c.international_doc_verification),
        ("marketing carrier", &c.marketing_carrier),
        ("frequent flyer airline", &c.frequent_flyer_airline),
        ("frequent flyer number", &c.frequent_flyer_number),
        ("ID/AD indicator", &c.id_ad_indicator),
        ("free baggage", &c.free_baggage_allowance),
        ("fast track", &c.fast_track),
        ("airline use", &c.airline_use),
    ];
    for (label, value) in rows {
        if value.is_some() {
            println!("  {label:<22} {}", display_opt(value));
        }
    }
}

fn print_trailer(pass: &BoardingPass) {
    if let Some(unique) = &pass.unique {
        println!("unique conditional");
        println!("  version                {:?}", unique.version_number);
        println!("  structured size        {}", unique.structured_size);
        println!(
            "  issue date             {}",
            display_opt(&unique.issue_date)
        );
        if let Some(day) = unique.issue_day_of_year() {
            println!("  issue day-of-year      {day}");
        }
        println!(
            "  issuer airline         {}",
            display_opt(&unique.issuer_airline)
        );
        for tag in &unique.bag_tags {
            println!("  bag tag                {tag:?}");
        }
    }
    if !pass.security.is_absent() {
        println!("security");
        match (pass.security.type_code, pass.security.declared_length) {
            (Some(type_code), Some(length)) => {
                println!("  type                   {type_code:?}");
                println!("  declared length        {length}");
            }
            _ => println!("  unmarked trailing blob"),
        }
        if let Some(payload) = &pass.security.payload {
            println!("  payload                {payload:?}");
        }
    }
}

fn display_opt(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "-".to_string(),
    }
}
