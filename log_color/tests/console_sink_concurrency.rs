// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Many threads writing through clones of one [`ConsoleSink`]: every line has to come
//! out whole, with its own start and reset sequences.

use pretty_assertions::assert_eq;
use r3bl_log_color::{ColorLevel, ConsoleSink, LogTextCtx, fg_green, fg_red,
                     strip_color_codes};
use r3bl_test_fixtures::StdoutMock;
use std::{sync::{Arc,
                 atomic::{AtomicBool, Ordering}},
          thread};

const THREAD_COUNT: usize = 8;
const LINES_PER_THREAD: usize = 200;

fn make_line(thread_id: usize, line_id: usize) -> LogTextCtx {
    fg_red(format!("[t{thread_id}]"))
        .then([LogTextCtx::from_text(" line "), fg_green(line_id.to_string())])
}

fn spawn_writers(
    sink: &ConsoleSink,
    write_fn: fn(&ConsoleSink, &LogTextCtx),
) -> Vec<thread::JoinHandle<()>> {
    (0..THREAD_COUNT)
        .map(|thread_id| {
            let sink = sink.clone();
            thread::spawn(move || {
                for line_id in 0..LINES_PER_THREAD {
                    write_fn(&sink, &make_line(thread_id, line_id));
                }
            })
        })
        .collect()
}

fn parse_line(line: &str) -> (usize, usize) {
    let raw = strip_color_codes(line);
    let (tag, line_id) = raw.split_once(" line ").unwrap();
    let thread_id = tag
        .strip_prefix("[t")
        .and_then(|it| it.strip_suffix(']'))
        .unwrap()
        .parse()
        .unwrap();
    (thread_id, line_id.parse().unwrap())
}

/// Every line parses back into `(thread_id, line_id)`, and each thread's lines are in
/// the order it wrote them.
fn assert_lines_intact(output: &str) {
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREAD_COUNT * LINES_PER_THREAD);

    let mut seen: Vec<Vec<usize>> = vec![Vec::new(); THREAD_COUNT];
    for line in lines {
        let (thread_id, line_id) = parse_line(line);
        seen[thread_id].push(line_id);
    }

    let expected: Vec<usize> = (0..LINES_PER_THREAD).collect();
    for line_ids in seen {
        assert_eq!(line_ids, expected);
    }
}

#[test]
fn test_concurrent_println_keeps_lines_intact() {
    let stdout_mock = StdoutMock::new();
    let sink = ConsoleSink::new(stdout_mock.clone(), ColorLevel::Hundreds);

    for handle in spawn_writers(&sink, |sink, line| {
        sink.println(line).unwrap();
    }) {
        handle.join().unwrap();
    }

    let output = stdout_mock.get_copy_of_buffer_as_string();
    assert_lines_intact(&output);
    for line in output.lines() {
        assert!(line.starts_with("\x1b[31m["));
        assert!(line.ends_with("\x1b[0m"));
    }
}

#[test]
fn test_concurrent_non_exclusive_writes_keep_lines_intact() {
    let stdout_mock = StdoutMock::new();
    let sink = ConsoleSink::new(stdout_mock.clone(), ColorLevel::Millions);

    for handle in spawn_writers(&sink, |sink, line| {
        let line = line.clone().then([LogTextCtx::from_text("\n")]);
        sink.write(&line, false).unwrap();
    }) {
        handle.join().unwrap();
    }

    assert_lines_intact(&stdout_mock.get_copy_of_buffer_as_string());
}

#[test]
fn test_level_toggling_while_writing_gives_whole_lines() {
    let stdout_mock = StdoutMock::new();
    let sink = ConsoleSink::new(stdout_mock.clone(), ColorLevel::Basic);
    let done = Arc::new(AtomicBool::new(false));

    let toggler = {
        let sink = sink.clone();
        let done = done.clone();
        thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                sink.disable();
                thread::yield_now();
                sink.enable();
                thread::yield_now();
            }
        })
    };

    for handle in spawn_writers(&sink, |sink, line| {
        sink.println(line).unwrap();
    }) {
        handle.join().unwrap();
    }
    done.store(true, Ordering::Relaxed);
    toggler.join().unwrap();

    let output = stdout_mock.get_copy_of_buffer_as_string();
    assert_lines_intact(&output);
    for line in output.lines() {
        // Either fully colored for the basic level or fully raw.
        let (thread_id, line_id) = parse_line(line);
        let expected = make_line(thread_id, line_id);
        assert!(
            line == expected.to_string_for_level(ColorLevel::Basic)
                || line == expected.to_raw_string(),
            "{line:?}"
        );
    }
    assert_eq!(sink.level(), ColorLevel::Basic);
}
