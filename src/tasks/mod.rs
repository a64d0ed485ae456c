// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload catalog
//! requests from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into catalog calls and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! Tasks are processed one at a time in the order they were sent, so when two
//! searches are submitted back to back the later one always completes last.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{
    catalog::{CatalogError, MovieCatalog},
    events::AppEvent,
    model::{Movie, search::CatalogRequest},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    Fetch(CatalogRequest),
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the catalog client and blocks on the task channel until
/// the sending side is dropped.
///
/// # Arguments
///
/// * `catalog` - The catalog to answer requests from.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    catalog: Box<dyn MovieCatalog>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                catalog: catalog.as_ref(),
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                // The UI has gone away, nobody is left to answer
                tracing::debug!("task worker stopping: {e:#}");
                break;
            }
        }
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    catalog: &'a dyn MovieCatalog,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::Fetch(request) => {
            let reply = Reply::new(ctx.event_tx, &request);
            match request {
                CatalogRequest::Popular => handlers::fetch_popular(ctx, reply),
                CatalogRequest::Search(query) => handlers::search(ctx, reply, &query),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplyKind {
    Popular,
    Search,
}

/// Completion handle for a single catalog request.
///
/// Every request must produce exactly one completion event, since that is
/// what clears the loading indicator. Catalog panics are caught in the
/// handlers and answered normally; if a `Reply` is still dropped without
/// being sent, it sends a failure on the way out.
pub(crate) struct Reply<'a> {
    event_tx: &'a Sender<AppEvent>,
    kind: ReplyKind,
    sent: bool,
}

impl<'a> Reply<'a> {
    fn new(event_tx: &'a Sender<AppEvent>, request: &CatalogRequest) -> Self {
        let kind = match request {
            CatalogRequest::Popular => ReplyKind::Popular,
            CatalogRequest::Search(_) => ReplyKind::Search,
        };

        Self {
            event_tx,
            kind,
            sent: false,
        }
    }

    pub(crate) fn send(mut self, result: Result<Vec<Movie>, CatalogError>) -> Result<()> {
        self.sent = true;
        self.event_tx.send(self.kind.event(result))?;

        Ok(())
    }
}

impl Drop for Reply<'_> {
    fn drop(&mut self) {
        if !self.sent {
            let _ = self
                .event_tx
                .send(self.kind.event(Err(CatalogError::service("request abandoned"))));
        }
    }
}

impl ReplyKind {
    fn event(self, result: Result<Vec<Movie>, CatalogError>) -> AppEvent {
        match self {
            ReplyKind::Popular => AppEvent::PopularLoaded(result),
            ReplyKind::Search => AppEvent::SearchCompleted(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{self, TryRecvError},
        time::Duration,
    };

    use super::*;

    struct FakeCatalog {
        popular: Result<Vec<Movie>, CatalogError>,
    }

    impl MovieCatalog for FakeCatalog {
        fn popular(&self) -> Result<Vec<Movie>, CatalogError> {
            self.popular.clone()
        }

        fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
            match query {
                "panic" => panic!("catalog blew up"),
                "none" => Ok(vec![]),
                _ => Ok(vec![Movie::new(7, query)]),
            }
        }
    }

    fn fake() -> Box<dyn MovieCatalog> {
        Box::new(FakeCatalog {
            popular: Ok(vec![Movie::new(1, "Inception"), Movie::new(2, "Interstellar")]),
        })
    }

    fn recv(event_rx: &Receiver<AppEvent>) -> AppEvent {
        event_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker did not reply")
    }

    #[test]
    fn unsent_reply_reports_abandoned_request() {
        let (event_tx, event_rx) = mpsc::channel();

        drop(Reply::new(&event_tx, &CatalogRequest::Search("dune".into())));

        match event_rx.try_recv() {
            Ok(AppEvent::SearchCompleted(Err(CatalogError::Service { message, .. }))) => {
                assert_eq!(message, "request abandoned")
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(event_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn sent_reply_produces_exactly_one_event() {
        let (event_tx, event_rx) = mpsc::channel();

        let reply = Reply::new(&event_tx, &CatalogRequest::Popular);
        reply.send(Ok(vec![])).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::PopularLoaded(Ok(_)))));
        assert!(matches!(event_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn worker_answers_requests_in_order() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker = spawn_task_worker(fake(), task_rx, event_tx);

        task_tx.send(AppTask::Fetch(CatalogRequest::Popular)).unwrap();
        task_tx
            .send(AppTask::Fetch(CatalogRequest::Search("first".into())))
            .unwrap();
        task_tx
            .send(AppTask::Fetch(CatalogRequest::Search("none".into())))
            .unwrap();

        match recv(&event_rx) {
            AppEvent::PopularLoaded(Ok(movies)) => assert_eq!(movies.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
        match recv(&event_rx) {
            AppEvent::SearchCompleted(Ok(movies)) => {
                assert_eq!(movies, vec![Movie::new(7, "first")])
            }
            other => panic!("unexpected {other:?}"),
        }
        match recv(&event_rx) {
            AppEvent::SearchCompleted(Ok(movies)) => assert!(movies.is_empty()),
            other => panic!("unexpected {other:?}"),
        }

        drop(task_tx);
        worker.join().unwrap();
    }

    #[test]
    fn failures_are_forwarded_to_the_ui() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let catalog = Box::new(FakeCatalog {
            popular: Err(CatalogError::Network("timed out".into())),
        });
        let _worker = spawn_task_worker(catalog, task_rx, event_tx);

        task_tx.send(AppTask::Fetch(CatalogRequest::Popular)).unwrap();

        assert!(matches!(
            recv(&event_rx),
            AppEvent::PopularLoaded(Err(CatalogError::Network(_)))
        ));
    }

    #[test]
    fn worker_keeps_serving_after_a_catalog_panic() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker = spawn_task_worker(fake(), task_rx, event_tx);

        task_tx
            .send(AppTask::Fetch(CatalogRequest::Search("panic".into())))
            .unwrap();

        match recv(&event_rx) {
            AppEvent::SearchCompleted(Err(CatalogError::Service { status, message })) => {
                assert_eq!(status, None);
                assert_eq!(message, "request abandoned");
            }
            other => panic!("unexpected {other:?}"),
        }

        task_tx
            .send(AppTask::Fetch(CatalogRequest::Search("dune".into())))
            .expect("worker stopped after a panic");

        match recv(&event_rx) {
            AppEvent::SearchCompleted(Ok(movies)) => {
                assert_eq!(movies, vec![Movie::new(7, "dune")])
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(event_rx.try_recv(), Err(TryRecvError::Empty)));

        drop(task_tx);
        worker.join().unwrap();
    }
}
