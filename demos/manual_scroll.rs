use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal,
};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use scrollintent::{Detector, Event, Metrics, Rect, StaticView};

/// Wheel/arrow-scroll a virtual container and watch the classification
/// flip between manual and automatic. `p` scrolls programmatically (stays
/// automatic), `q` quits.
fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("manual_scroll.log")?;
    WriteLogger::init(LevelFilter::Debug, LogConfig::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout);

    let _ = execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let (width, height) = terminal::size()?;

    // One full-screen container with a 1-cell vertical scrollbar track.
    let mut view = StaticView::new();
    view.insert(
        "demo",
        Metrics::new(Rect::new(0, 0, width, height), width.saturating_sub(1), height),
    );
    view.focus(Some("demo"));

    let manual = Rc::new(RefCell::new(false));
    let manual_flag = Rc::clone(&manual);

    let mut detector = Detector::new();
    let subscription = detector
        .attach("demo", move |is_manual, _| {
            *manual_flag.borrow_mut() = is_manual;
        })
        .expect("attach demo container");

    let mut offset: u16 = 0;

    loop {
        draw(stdout, offset, *manual.borrow())?;

        let now = Instant::now();
        let timeout = detector
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(Duration::from_millis(250));

        if event::poll(timeout)? {
            let raw = event::read()?;

            if let CrosstermEvent::Key(key_event) = &raw {
                if key_event.kind == KeyEventKind::Press {
                    match key_event.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            detector.detach(subscription);
                            return Ok(());
                        }
                        // Programmatic jump: the detector stays silent.
                        KeyCode::Char('p') => {
                            offset = offset.saturating_add(10);
                            scroll_to(&mut detector, &mut view, offset);
                            continue;
                        }
                        KeyCode::Up => offset = offset.saturating_sub(1),
                        KeyCode::Down => offset = offset.saturating_add(1),
                        _ => {}
                    }
                }
            }

            if let Some(signal) = Event::from_crossterm(&raw) {
                // Wheel ticks also move the virtual offset.
                if let Event::Wheel { delta_y, .. } = &signal {
                    offset = offset.saturating_add_signed(*delta_y);
                }
                detector.dispatch(&signal, &view, Instant::now());
                scroll_to(&mut detector, &mut view, offset);
            }
        }

        detector.poll(Instant::now());
    }
}

fn scroll_to(detector: &mut Detector, view: &mut StaticView, offset: u16) {
    view.set_scroll("demo", 0, offset);
    detector.dispatch(
        &Event::Scroll {
            target: "demo".into(),
        },
        view,
        Instant::now(),
    );
}

fn draw(stdout: &mut io::Stdout, offset: u16, manual: bool) -> io::Result<()> {
    let label = if manual { "MANUAL" } else { "automatic" };
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(2, 1),
        Print("scrollintent demo - wheel/arrows scroll, p=programmatic jump, q=quit"),
        cursor::MoveTo(2, 3),
        Print(format!("offset: {offset:>5}    classification: {label}   ")),
    )?;
    stdout.flush()
}
