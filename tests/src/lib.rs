#[cfg(test)]
mod test_ballot_flow;
#[cfg(test)]
mod utils;
