//! Random Source
//!
//! テンプレート・フレーズ・構成の選択に使う乱数源。
//! テストでは決定的な実装に差し替える。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// 乱数源トレイト
pub trait RandomSource: Send + Sync {
    /// `0..len` の範囲のインデックスを返す（`len > 0` が前提）
    fn index(&self, len: usize) -> usize;
}

/// スライスから一要素を選択（空なら `None`）
pub fn pick<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()) % items.len())
}

/// 固定長の（空でない）プールから一要素を選択
pub fn choose<'a, T, const N: usize>(rng: &dyn RandomSource, items: &'a [T; N]) -> &'a T {
    &items[rng.index(N) % N]
}

/// スレッドローカルRNGによる既定の乱数源
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// シード固定の乱数源（再現可能なサンプリング用）
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// シードから作成
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

/// 与えた値を順番に返す乱数源
///
/// 値は `len` で剰余を取ってから返す。列を使い切ると先頭に戻る。
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// 値の列から作成
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// 常に同じ値を返す乱数源
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn index(&self, len: usize) -> usize {
        if len == 0 || self.values.is_empty() {
            return 0;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[position] % len
    }
}
