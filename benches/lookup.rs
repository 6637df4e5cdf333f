use criterion::{criterion_group, criterion_main, Criterion};
use ghost_dictionary::{PrefixDictionary, PrefixTrie, SortedWordList};

/// Every word of three to six letters drawn from a small alphabet, in sorted order.
fn words() -> Vec<String> {
    let letters = ['a', 'e', 'n', 'r', 's', 't'];
    let mut words = vec![String::new()];
    let mut all = vec![];
    for len in 1..=6 {
        words = words.iter()
            .flat_map(|w| letters.iter().map(move |&c| format!("{}{}", w, c)))
            .collect();
        if len >= 3 {
            all.extend(words.iter().cloned());
        }
    }
    all.sort();
    all
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = words();
    let sorted = SortedWordList::from_lines(words.iter().map(String::as_str), 3);
    let trie = PrefixTrie::from_lines(words.iter().map(String::as_str), 3);

    let mut group = c.benchmark_group("lookup");
    group.bench_function("sorted is_word", |b| b.iter(|| sorted.is_word("stare")));
    group.bench_function("trie is_word", |b| b.iter(|| trie.is_word("stare")));
    group.bench_function("sorted any word", |b| b.iter(|| sorted.get_any_word_starting_with("ten")));
    group.bench_function("trie any word", |b| b.iter(|| trie.get_any_word_starting_with("ten")));
    group.bench_function("sorted good word", |b| b.iter(|| sorted.get_good_word_starting_with("te")));
    group.bench_function("trie good word", |b| b.iter(|| trie.get_good_word_starting_with("te")));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
