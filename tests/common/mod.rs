#![allow(dead_code)]

use lol_matchup::{AppError, PageSource};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Condvar, Mutex};
use std::time::Duration;

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

pub fn matchup_page(summary: &str, games: &str) -> String {
    read_fixture("matchup_page.html")
        .replace("{{SUMMARY}}", summary)
        .replace("{{GAMES}}", games)
}

pub fn summary(win_rate: &str, vs_avg: &str, normalized: &str) -> String {
    format!(
        "Aatrox wins against Darius {}% of the time which is {}% different from its average. \
         After normalising both champions' win rates the matchup is {}% different than expected.",
        win_rate, vs_avg, normalized
    )
}

#[derive(Clone)]
pub enum Reply {
    Page(String),
    Status(u16),
}

/// Answers by the own-champion slug found in the requested URL and counts calls.
#[derive(Default)]
pub struct FakeSite {
    replies: Mutex<HashMap<String, Reply>>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self {
        FakeSite::default()
    }

    pub fn reply(self, own_slug: &str, reply: Reply) -> Self {
        self.set_reply(own_slug, reply);
        self
    }

    pub fn set_reply(&self, own_slug: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .insert(own_slug.to_string(), reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        let mut urls = self.requested.lock().unwrap().clone();
        urls.sort();
        urls
    }
}

impl PageSource for FakeSite {
    fn fetch_page(&self, target_url: &str) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(target_url.to_string());

        let own_slug = target_url
            .split("/lol/")
            .nth(1)
            .and_then(|rest| rest.split('/').next())
            .unwrap_or_default()
            .to_string();

        match self.replies.lock().unwrap().get(&own_slug).cloned() {
            Some(Reply::Page(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(AppError::HttpStatus {
                status,
                url: target_url.to_string(),
            }),
            None => Err(AppError::HttpStatus {
                status: 404,
                url: target_url.to_string(),
            }),
        }
    }
}

/// Holds every request until `expected` requests are waiting at once, then answers them
/// all. A request that waits longer than `timeout` fails, so fetches issued one after
/// another never all succeed.
pub struct RendezvousSite {
    expected: usize,
    timeout: Duration,
    arrived: Mutex<usize>,
    all_arrived: Condvar,
}

impl RendezvousSite {
    pub fn new(expected: usize, timeout: Duration) -> Self {
        RendezvousSite {
            expected,
            timeout,
            arrived: Mutex::new(0),
            all_arrived: Condvar::new(),
        }
    }
}

impl PageSource for RendezvousSite {
    fn fetch_page(&self, target_url: &str) -> Result<String, AppError> {
        let mut arrived = self.arrived.lock().unwrap();
        *arrived += 1;
        self.all_arrived.notify_all();

        let (arrived, wait) = self
            .all_arrived
            .wait_timeout_while(arrived, self.timeout, |n| *n < self.expected)
            .unwrap();
        drop(arrived);

        if wait.timed_out() {
            return Err(AppError::HttpError(format!("{} never met its siblings", target_url)));
        }
        Ok(matchup_page(&summary("50", "0", "0"), "10"))
    }
}

/// Reports each request on `entered`, then blocks until `release` yields.
pub struct HeldSite {
    entered: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
}

impl HeldSite {
    pub fn new(entered: Sender<()>, release: Receiver<()>) -> Self {
        HeldSite {
            entered: Mutex::new(entered),
            release: Mutex::new(release),
        }
    }
}

impl PageSource for HeldSite {
    fn fetch_page(&self, _target_url: &str) -> Result<String, AppError> {
        let _ = self.entered.lock().unwrap().send(());
        self.release
            .lock()
            .unwrap()
            .recv()
            .map_err(|e| AppError::HttpError(e.to_string()))?;
        Ok(matchup_page(&summary("55", "2", "1"), "42"))
    }
}
