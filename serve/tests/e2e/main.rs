//! e2e test harness: each module drives a server spawned on 127.0.0.1:0.

mod common;

mod chat;
mod diag;
mod features;
mod real_api;
mod schedule;
mod shell;
