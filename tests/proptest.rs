use linked_queues::{Deque, LinkedSequence, Queue, StackQueue};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;

fn render_deque(model: &VecDeque<usize>) -> String {
    let mut s = String::from("(H) <-> ");
    for i in model {
        s.push_str(&format!("{} <-> ", i));
    }
    s.push_str("(T)");
    s
}

fn render_queue(model: &VecDeque<usize>) -> String {
    let mut s = String::from("StackQueue: ");
    for i in model {
        s.push_str(&format!("{} -> ", i));
    }
    s
}

proptest! {
    #[test]
    fn random_interleaved_deque_operations(
        action in proptest::collection::vec(any::<usize>(), 0..128)
    ){
        let mut d: Deque<usize> = Deque::new();
        let mut model = VecDeque::new();

        for a in action {
            match a & 0x03 {
                0x00 => {
                    d.add_first(a);
                    model.push_front(a);
                },
                0x01 => {
                    d.add_last(a);
                    model.push_back(a);
                },
                0x02 => {
                    prop_assert_eq!(model.pop_front(), d.remove_first());
                },
                0x03 => {
                    prop_assert_eq!(model.pop_back(), d.remove_last());
                },
                _ => unreachable!(),
            }

            prop_assert_eq!(model.len(), d.len());
            prop_assert_eq!(model.front(), d.first());
            prop_assert_eq!(model.back(), d.last());
        }

        prop_assert_eq!(render_deque(&model), d.to_string());
    }
}

proptest! {
    #[test]
    fn random_interleaved_queue_operations(
        action in proptest::collection::vec(any::<usize>(), 0..128)
    ){
        let mut q: StackQueue<usize> = StackQueue::new();
        let mut model = VecDeque::new();
        let mut enqueued = 0;

        for a in action {
            match a % 3 {
                0 => {
                    q.enqueue(a);
                    model.push_back(a);
                    enqueued += 1;
                },
                1 => {
                    prop_assert_eq!(model.pop_front(), q.dequeue());
                },
                2 => {
                    prop_assert_eq!(model.front(), q.peek());
                    prop_assert_eq!(model.front(), q.first());
                },
                _ => unreachable!(),
            }

            prop_assert_eq!(model.len(), q.len());
            prop_assert!(q.transferred() <= enqueued);
        }

        let rendered = q.to_string();
        prop_assert_eq!(render_queue(&model), rendered.clone());
        prop_assert_eq!(rendered, q.to_string());
        prop_assert_eq!(model.pop_front(), q.dequeue());
    }
}

proptest! {
    #[test]
    fn queue_types_agree(
        action in proptest::collection::vec(any::<Option<u8>>(), 0..64)
    ){
        let mut a: StackQueue<u8> = StackQueue::new();
        let mut b: Deque<u8> = Deque::new();

        for act in action {
            match act {
                Some(v) => {
                    Queue::enqueue(&mut a, v);
                    Queue::enqueue(&mut b, v);
                },
                None => {
                    prop_assert_eq!(Queue::dequeue(&mut a), Queue::dequeue(&mut b));
                },
            }
            prop_assert_eq!(Queue::len(&a), Queue::len(&b));
        }
    }
}

proptest! {
    #[test]
    fn random_remove(
        seed in any::<u64>(),
        pushes in proptest::collection::vec(any::<usize>(), 0..64),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut list = LinkedSequence::new();
        let mut positions = Vec::new();

        for p in pushes {
            let pos = list.add_last(p);
            positions.push((pos, p));
        }

        positions.shuffle(&mut rng);

        for (pos, p) in positions.iter() {
            prop_assert_eq!(Some(*p), list.remove(pos));
        }

        prop_assert!(list.is_empty());
        prop_assert_eq!("(H) <-> (T)", list.to_string());

        for (pos, _) in positions.iter() {
            prop_assert_eq!(None, list.get(pos));
        }
    }
}
