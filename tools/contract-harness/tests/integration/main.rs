mod helpers;
mod live_test;
mod recorded_test;
mod runner_test;
