use forward_list::collections::linked::{LinkedList, Node};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("\n[LinkedList]\n");

    let mut list = LinkedList::new();
    for i in 1..=3 {
        list.append(i);
    }
    list.prepend(0);
    list.print();

    list.delete(&2);
    list.print();

    match list.find(&3) {
        Some(node) => println!(
            "found {} (followed by {:?})",
            node.value(),
            node.next().map(Node::value)
        ),
        None => println!("3 not found"),
    }

    list.append(4);
    list.append(5);
    list.print();

    let removed = list.remove_nth_from_end(2);
    println!("removed {removed} from second to last");
    list.print();

    match list.try_remove_nth_from_end(10) {
        Ok(value) => println!("removed {value}"),
        Err(error) => tracing::warn!(%error, "removal skipped"),
    }

    while list.try_remove_nth_from_end(1).is_ok() {
        list.print();
    }
    println!("{list:?}");
}
