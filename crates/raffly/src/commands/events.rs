//! Event command handlers.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;

use raffly_core::{Event, EventFilter, EventStatus, GeoPoint};

use crate::cli::{EventsArgs, EventsCommand, GlobalOpts, StatusArg};
use crate::error::CliError;
use crate::output;

use super::util::{self, SnapshotContext};

impl From<StatusArg> for EventStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Open => Self::Open,
            StatusArg::Closed => Self::Closed,
            StatusArg::LotteryDrawn => Self::LotteryDrawn,
            StatusArg::Completed => Self::Completed,
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Waitlist")]
    waitlist: String,
    #[tabled(rename = "Spots")]
    spots: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&&Event> for EventRow {
    fn from(event: &&Event) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.clone(),
            status: event.status.to_string(),
            date: event.date.clone(),
            location: event.location.clone(),
            price: event.formatted_price(),
            waitlist: event.waitlist_label(),
            spots: event.available_spots().to_string(),
            tags: event.tags.join(", "),
        }
    }
}

// ── Reports (eligibility / distance) ────────────────────────────────

#[derive(Serialize)]
struct EligibilityReport {
    event_id: String,
    event_name: String,
    status: EventStatus,
    registration_open: bool,
    waitlist_full: bool,
    available_spots: u32,
    distance_km: Option<f64>,
    within_radius: Option<bool>,
    eligible: bool,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    event_id: String,
    event_name: String,
    distance_km: f64,
    radius_km: Option<u32>,
    within_radius: Option<bool>,
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(ctx: &SnapshotContext, args: EventsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        EventsCommand::List {
            query,
            tags,
            status,
            open_now,
            free,
        } => {
            let filter = EventFilter::new(query.unwrap_or_default(), tags.unwrap_or_default());
            let mut filtered = filter.apply(ctx.catalog.events());

            if let Some(status) = status {
                let wanted = EventStatus::from(status);
                filtered.retain(|event| event.status == wanted);
            }
            if open_now {
                let now = Utc::now();
                filtered.retain(|event| event.is_registration_open(now));
            }
            if free {
                #[allow(clippy::float_cmp)]
                filtered.retain(|event| event.price == 0.0);
            }

            let out = output::render_list(
                &global.output,
                &filtered,
                |event| EventRow::from(event),
                |event| event.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Get { event } => {
            let event = ctx.catalog.find(&event)?;
            let color = output::should_color(&global.color);
            let out = output::render_single(
                &global.output,
                &event,
                |event| detail_view(event, color),
                |event| event.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Eligibility { event, lat, lng } => {
            let event = ctx.catalog.find(&event)?;
            let point = util::entrant_point(lat, lng, ctx.home)?;
            let report = eligibility_report(event, point, Utc::now());
            let out = output::render_single(
                &global.output,
                &report,
                eligibility_view,
                |report| {
                    if report.eligible { "eligible" } else { "not-eligible" }.to_owned()
                },
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Distance { event, lat, lng } => {
            let event = ctx.catalog.find(&event)?;
            let point = util::validated_point(lat, lng)?;
            let report = distance_report(event, point)?;
            let out = output::render_single(
                &global.output,
                &report,
                distance_view,
                |report| format!("{:.2}", report.distance_km),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

// ── Report construction ─────────────────────────────────────────────

fn eligibility_report(
    event: &Event,
    point: Option<GeoPoint>,
    now: DateTime<Utc>,
) -> EligibilityReport {
    let fence = event.geofence();

    let distance_km = match (fence, point) {
        (Some(fence), Some(point)) => Some(fence.center.distance_km(point)),
        _ => None,
    };
    // Fence active but no coordinate known: fail open, leave the verdict
    // undetermined rather than claiming the entrant is inside.
    let within_radius = match (fence, point) {
        (Some(fence), Some(point)) => Some(fence.contains(point)),
        _ => None,
    };

    let registration_open = event.is_registration_open(now);
    EligibilityReport {
        event_id: event.id.to_string(),
        event_name: event.name.clone(),
        status: event.status,
        registration_open,
        waitlist_full: event.is_waitlist_full(),
        available_spots: event.available_spots(),
        distance_km,
        within_radius,
        eligible: registration_open && within_radius != Some(false),
    }
}

fn distance_report(event: &Event, point: GeoPoint) -> Result<DistanceReport, CliError> {
    let (Some(lat), Some(lng)) = (event.geolocation_lat, event.geolocation_lng) else {
        return Err(CliError::Validation {
            field: "event".into(),
            reason: format!("event '{}' has no venue coordinates", event.id),
        });
    };

    let distance_km = GeoPoint::new(lat, lng).distance_km(point);
    let within_radius = event
        .geofence()
        .map(|fence| distance_km <= fence.radius_km);

    Ok(DistanceReport {
        event_id: event.id.to_string(),
        event_name: event.name.clone(),
        distance_km,
        radius_km: event.geolocation_radius,
        within_radius,
    })
}

// ── Detail views (table format) ─────────────────────────────────────

fn status_badge(status: EventStatus, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    match status {
        EventStatus::Open => status.green().to_string(),
        EventStatus::Closed => status.red().to_string(),
        EventStatus::LotteryDrawn => status.cyan().to_string(),
        EventStatus::Completed => status.dimmed().to_string(),
    }
}

fn fmt_ts(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn detail_view(event: &Event, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", event.name, status_badge(event.status, color));
    let _ = writeln!(out, "  Id:            {}", event.id);
    let _ = writeln!(out, "  Organizer:     {}", event.organizer_id);
    let _ = writeln!(
        out,
        "  When:          {} {} - {}",
        event.date, event.time, event.end_time
    );
    let _ = writeln!(
        out,
        "  Where:         {} ({})",
        event.location, event.location_address
    );
    let _ = writeln!(
        out,
        "  Registration:  {} to {}",
        fmt_ts(event.registration_opens),
        fmt_ts(event.registration_closes)
    );
    if let Some(draw) = event.lottery_draw_date {
        let _ = writeln!(out, "  Lottery draw:  {}", fmt_ts(draw));
    }
    let _ = writeln!(out, "  Price:         {}", event.formatted_price());
    let _ = writeln!(
        out,
        "  Spots:         {} of {} available",
        event.available_spots(),
        event.capacity
    );
    let _ = writeln!(out, "  Waitlist:      {}", event.waitlist_label());
    if let Some(badge) = event.geofence_label() {
        let _ = writeln!(out, "  Geolocation:   {badge}");
    }
    if !event.tags.is_empty() {
        let _ = writeln!(out, "  Tags:          {}", event.tags.join(", "));
    }
    if event.is_flagged {
        let _ = writeln!(out, "  Flagged:       yes ({} reports)", event.flag_count);
    }
    if !event.description.is_empty() {
        let _ = writeln!(out, "  Description:   {}", event.description);
    }
    out.trim_end().to_owned()
}

fn eligibility_view(report: &EligibilityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", report.event_name, report.event_id);
    let _ = writeln!(out, "  Status:           {}", report.status);
    let _ = writeln!(
        out,
        "  Registration:     {}",
        if report.registration_open { "open" } else { "closed" }
    );
    let _ = writeln!(
        out,
        "  Waitlist:         {}",
        if report.waitlist_full { "full" } else { "has space" }
    );
    let _ = writeln!(out, "  Available spots:  {}", report.available_spots);
    match (report.within_radius, report.distance_km) {
        (Some(true), Some(d)) => {
            let _ = writeln!(out, "  Geolocation:      within radius ({d:.1} km away)");
        }
        (Some(false), Some(d)) => {
            let _ = writeln!(out, "  Geolocation:      outside radius ({d:.1} km away)");
        }
        _ => {
            let _ = writeln!(out, "  Geolocation:      unrestricted");
        }
    }
    let _ = writeln!(
        out,
        "  Eligible to join: {}",
        if report.eligible { "yes" } else { "no" }
    );
    out.trim_end().to_owned()
}

fn distance_view(report: &DistanceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", report.event_name, report.event_id);
    let _ = writeln!(out, "  Distance:  {:.2} km", report.distance_km);
    if let Some(radius) = report.radius_km {
        let _ = writeln!(out, "  Radius:    {radius} km");
    }
    if let Some(within) = report.within_radius {
        let _ = writeln!(
            out,
            "  Verdict:   {}",
            if within { "within radius" } else { "outside radius" }
        );
    }
    out.trim_end().to_owned()
}
