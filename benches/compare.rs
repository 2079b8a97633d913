use std::collections::LinkedList;

use divan;
use pooled_list::space::*;
use pooled_list::PooledList;

fn main() {
    divan::main();
}

#[divan::bench(args = [4, 8, 64])]
fn pooled_list_push(n: usize) {
    divan::black_box({
        let mut list: PooledList<usize> = PooledList::new();
        for i in 0..n {
            list.push(divan::black_box(i));
        }
        list
    });
}

#[divan::bench(args = [4, 8, 64])]
fn pooled_list_push_wide_pool(n: usize) {
    divan::black_box({
        let mut list: PooledList<usize, S64> = PooledList::new();
        for i in 0..n {
            list.push(divan::black_box(i));
        }
        list
    });
}

#[divan::bench(args = [4, 8, 64])]
fn pooled_list_push_boxed_hint(n: usize) {
    divan::black_box({
        let mut list = PooledList::<usize>::boxed(n);
        for i in 0..n {
            list.push(divan::black_box(i));
        }
        list
    });
}

#[divan::bench(args = [4, 8, 64])]
fn vec_push(n: usize) {
    divan::black_box({
        let mut vec = Vec::new();
        for i in 0..n {
            vec.push(divan::black_box(i));
        }
        vec
    });
}

#[divan::bench(args = [4, 8, 64])]
fn linked_list_push(n: usize) {
    divan::black_box({
        let mut list = LinkedList::new();
        for i in 0..n {
            list.push_back(divan::black_box(i));
        }
        list
    });
}

#[divan::bench(args = [8, 64])]
fn pooled_list_index_of_str(bencher: divan::Bencher, n: usize) {
    let words: Vec<String> = (0..n).map(|i| format!("word-{}", i)).collect();
    let list: PooledList<&str> = words.iter().map(String::as_str).collect();
    let last = words[n - 1].as_str();

    bencher.bench_local(|| list.index_of_str(divan::black_box(last)));
}
