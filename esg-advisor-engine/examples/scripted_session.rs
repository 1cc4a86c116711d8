//! Drives a scripted advisory session on synthetic time and prints the
//! transcript. No terminal, no timers: the clock is just a number we move.

use std::time::Duration;

use esg_advisor_engine::message::MessageBody;
use esg_advisor_engine::profile::AdvisorProfile;
use esg_advisor_engine::session::ChatSession;

fn main() {
    let profile = AdvisorProfile::default();
    let mut session = ChatSession::open(profile, Duration::ZERO);

    // Intro lands at 1s.
    session.advance_to(Duration::from_secs(2));

    session.submit("Hello there!", Vec::new(), Duration::from_secs(2));
    session.advance_to(Duration::from_secs(5));

    session.submit(
        "Our competitors are Areias do Seixo, Sextantio, and Finca Serena",
        vec!["company_profile.pdf".to_string()],
        Duration::from_secs(5),
    );
    session.advance_to(Duration::from_secs(8));

    session.submit("Research", Vec::new(), Duration::from_secs(8));
    session.advance_to(Duration::from_secs(11));

    session.start_research(Duration::from_secs(11));
    // Step through the run so stage transitions show up in the trace.
    for sec in 11..=31 {
        session.advance_to(Duration::from_secs(sec));
    }

    println!("=== Transcript ===");
    for message in session.log() {
        let body = match &message.body {
            MessageBody::Text(text) => text.as_str(),
            MessageBody::ResearchPanel => "[research panel]",
        };
        println!("{}: {}", message.author_label, body);
        for attachment in &message.attachments {
            println!("    attachment: {}", attachment);
        }
        println!();
    }

    println!("=== Session trace ===");
    for event in session.events() {
        println!("{:?}", event);
    }

    println!();
    println!("report available: {}", session.report_available());
}
