//! The interactive menu and its current-array state.
//!
//! The menu owns the only piece of global mutable state in the program:
//! the current array, replaced wholesale after each completed operation.
//! Recoverable errors (bad input, violated preconditions) are printed and
//! the loop continues; protocol violations from the engine are propagated
//! out of `run` as fatal.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;

use sortlab::prelude::*;

/// Bounds used by the fill prompts, as in the classroom original.
const MAX_LENGTH: i64 = 50;
const VALUE_BOUND: i64 = 100;

/// Default bound for free-standing numeric prompts.
const PROMPT_BOUND: i64 = 10_000;

pub struct Menu {
    current: Vec<i64>,
    rng: StdRng,
}

impl Menu {
    pub fn new(rng: StdRng) -> Self {
        Self {
            current: Vec::new(),
            rng,
        }
    }

    /// Run the menu loop until the user exits or a fatal error occurs.
    pub fn run(&mut self) -> Result<()> {
        loop {
            print_operations();
            print!("Enter operation number (1 ... 12): ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                // EOF on stdin: treat like exit.
                return Ok(());
            }

            match line.trim() {
                "1" => self.fill()?,
                "2" => self.narrate(Bubble)?,
                "3" => self.narrate(Selection)?,
                "4" => self.narrate(Insertion)?,
                "5" => self.narrate(Counting)?,
                "6" => self.narrate(Quick)?,
                "7" => self.narrate(Merge)?,
                "8" => self.narrate(Heap)?,
                "9" => self.select_order_statistic()?,
                "10" => self.search()?,
                "11" => self.shuffle()?,
                "12" => {
                    println!("Exiting.");
                    return Ok(());
                }
                _ => println!("Error: invalid operation number."),
            }
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Fill the current array with random values.
    fn fill(&mut self) -> Result<()> {
        let Some(length) = crate::input::prompt_number("Enter array length", 1, MAX_LENGTH)? else {
            return Ok(());
        };
        let Some(min) = crate::input::prompt_number("Enter minimum value", -VALUE_BOUND, VALUE_BOUND)?
        else {
            return Ok(());
        };
        let Some(max) = crate::input::prompt_number("Enter maximum value", min, VALUE_BOUND)? else {
            return Ok(());
        };

        self.current = generate_array(length as usize, min, max, &mut self.rng);
        info!("filled array with {length} values in [{min}, {max}]");

        println!("Array filled with random values:");
        self.print_current();
        Ok(())
    }

    /// Run one narrated sort over the current array.
    fn narrate(&mut self, algorithm: Algorithm) -> Result<()> {
        if self.not_filled() {
            return Ok(());
        }
        let Some(ascending) =
            crate::input::prompt_flag("Enter sort direction (1 - ascending, 0 - descending)")?
        else {
            return Ok(());
        };
        let direction = if ascending { Ascending } else { Descending };

        println!("{} ({})", algorithm.name().to_uppercase(), direction.name());

        let sorter = Sorter::new()
            .algorithm(algorithm)
            .direction(direction)
            .build()?;

        match sorter.sort(&self.current) {
            Ok(steps) => {
                debug!("{} emitted {} steps", algorithm.name(), steps.len());
                // Protocol violations are fatal: propagate, never continue.
                self.current = drain_steps(steps, render_step)?;
                self.print_current();
            }
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    /// Find the k-th order statistic via quickselect.
    fn select_order_statistic(&mut self) -> Result<()> {
        if self.not_filled() {
            return Ok(());
        }
        let len = self.current.len() as i64;
        let Some(k) = crate::input::prompt_number("Enter order statistic k", 1, len)? else {
            return Ok(());
        };

        match quick_select(&self.current, k as usize) {
            Ok((value, rearranged)) => {
                println!("{k}-th smallest value: {value}");
                self.current = rearranged;
                self.print_current();
            }
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    /// Binary search the current array for a value.
    fn search(&mut self) -> Result<()> {
        if self.not_filled() {
            return Ok(());
        }
        let Some(target) =
            crate::input::prompt_number("Enter target value", -PROMPT_BOUND, PROMPT_BOUND)?
        else {
            return Ok(());
        };

        match binary_search(&self.current, target) {
            Ok(index) => println!("Value found at position {}.", index + 1),
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    /// Replace the current array with a fresh uniform permutation.
    fn shuffle(&mut self) -> Result<()> {
        if self.not_filled() {
            return Ok(());
        }
        self.current = shuffle_array(&self.current, &mut self.rng);
        println!("Array shuffled:");
        self.print_current();
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn not_filled(&self) -> bool {
        if self.current.is_empty() {
            println!("Array is not filled yet.");
            return true;
        }
        false
    }

    fn print_current(&self) {
        println!("Current array:");
        println!("{}", render_array(&self.current));
    }
}

/// Print the operation list.
fn print_operations() {
    println!("OPERATIONS:");
    println!("1 - Fill the array.");
    println!("2 - Bubble sort.");
    println!("3 - Selection sort.");
    println!("4 - Insertion sort.");
    println!("5 - Counting sort.");
    println!("6 - Quicksort.");
    println!("7 - Merge sort.");
    println!("8 - Heap sort.");
    println!("9 - Order statistic (quickselect).");
    println!("10 - Binary search.");
    println!("11 - Shuffle.");
    println!("12 - Exit.");
}

/// Render one step of a narration.
fn render_step(step: &Step<i64>) {
    match step {
        Step::Snapshot(state) => println!("{}", render_array(state)),
        Step::Info(text) => println!("-- {text}"),
        Step::Range { start, end } => println!("-- range {start}-{end}"),
    }
}

/// Space-joined array rendering.
fn render_array(array: &[i64]) -> String {
    array
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
