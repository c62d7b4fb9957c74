#![cfg(test)]

mod concurrency;
mod faults;
mod scenarios;
