// Curried addition: feed numbers one call at a time, call with nothing
// to read the running total.

use std::ops::Add;

/// Result of one call in an accumulation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    /// The chain was queried; this is the accumulated total.
    Total(T),
    /// The chain continues from the carried total.
    Next(Adder<T>),
}

/// Continuation holding the running total of an accumulation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adder<T> {
    total: T,
}

/// Start a fresh accumulation chain. `None` yields a zero total.
pub fn curried_add<T>(total: Option<T>) -> Step<T>
where
    T: Add<Output = T> + Default,
{
    match total {
        None => Step::Total(T::default()),
        Some(total) => Step::Next(Adder { total }),
    }
}

impl<T> Adder<T>
where
    T: Add<Output = T> + Default,
{
    /// `Some(n)` continues the chain with `n` added, `None` ends it.
    pub fn call(self, num: Option<T>) -> Step<T> {
        match num {
            None => Step::Total(self.total),
            Some(num) => curried_add(Some(self.total + num)),
        }
    }

    pub fn add(self, num: T) -> Self {
        Adder {
            total: self.total + num,
        }
    }

    pub fn total(self) -> T {
        self.total
    }
}

impl<T> Step<T>
where
    T: Add<Output = T> + Default,
{
    /// Continue the chain. A chain that already produced its total keeps it.
    pub fn call(self, num: Option<T>) -> Step<T> {
        match self {
            Step::Total(total) => Step::Total(total),
            Step::Next(adder) => adder.call(num),
        }
    }

    pub fn into_total(self) -> Option<T> {
        match self {
            Step::Total(total) => Some(total),
            Step::Next(_) => None,
        }
    }
}

/// Run a whole chain over `nums` and query it.
pub fn sum_chain<T, I>(nums: I) -> T
where
    T: Add<Output = T> + Default,
    I: IntoIterator<Item = T>,
{
    let mut nums = nums.into_iter();
    let mut step = curried_add(nums.next());
    for num in nums {
        step = step.call(Some(num));
    }
    match step.call(None) {
        Step::Total(total) => total,
        Step::Next(adder) => adder.total(),
    }
}
