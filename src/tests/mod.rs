pub mod common;

#[cfg(test)]
mod test_counter_search;
