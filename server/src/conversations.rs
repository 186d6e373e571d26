//! Aggregazione dei messaggi in riepiloghi di conversazione
//!
//! Un riepilogo per ogni partner con cui l'utente ha scambiato almeno un messaggio.
//! I campi di anteprima (ultimo messaggio, data, contesto app) vengono presi dal
//! messaggio più recente del partner ("seed"); il conteggio dei non letti invece
//! considera tutti i messaggi.

use crate::dtos::ConversationDTO;
use crate::entities::ExpandedMessage;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Raggruppa i messaggi di `current_user_id` per partner.
///
/// I messaggi vengono sempre riordinati dal più recente al più vecchio
/// (`created_at`, poi `message_id`) prima dell'iterazione: la scelta del seed dipende
/// da questo ordine, quindi non ci si fida dell'ordine in ingresso.
///
/// L'ordine dell'output non è garantito; chi ha bisogno di un ordine stabile
/// usa [`sort_by_recent_activity`].
pub fn aggregate_conversations(
    current_user_id: i32,
    mut messages: Vec<ExpandedMessage>,
) -> Vec<ConversationDTO> {
    messages.sort_by_key(|m| Reverse((m.created_at, m.message_id)));

    let mut conversations: Vec<ConversationDTO> = Vec::new();
    let mut index_by_partner: HashMap<i32, usize> = HashMap::new();

    for message in &messages {
        let partner_id = message.partner_of(current_user_id);

        let index = *index_by_partner.entry(partner_id).or_insert_with(|| {
            let partner = if message.sender_id == current_user_id {
                message.recipient_dto()
            } else {
                message.sender_dto()
            };
            conversations.push(ConversationDTO {
                partner,
                last_message: message.content.clone(),
                last_message_time: message.created_at,
                app: message.app_dto(),
                unread_count: 0,
            });
            conversations.len() - 1
        });

        if message.is_unread_for(current_user_id) {
            conversations[index].unread_count += 1;
        }
    }

    conversations
}

/// Ordina i riepiloghi per attività più recente
pub fn sort_by_recent_activity(conversations: &mut [ConversationDTO]) {
    conversations.sort_by_key(|c| Reverse(c.last_message_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::collections::HashSet;

    const ALICE: i32 = 1;
    const BOB: i32 = 2;
    const CAROL: i32 = 3;

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn name_of(id: i32) -> &'static str {
        match id {
            ALICE => "Alice",
            BOB => "Bob",
            _ => "Carol",
        }
    }

    fn msg(
        id: i32,
        from: i32,
        to: i32,
        content: &str,
        at: DateTime<Utc>,
        read: bool,
        app: Option<(i32, &str)>,
    ) -> ExpandedMessage {
        ExpandedMessage {
            message_id: id,
            sender_id: from,
            sender_name: name_of(from).to_string(),
            sender_email: format!("{}@test.com", name_of(from).to_lowercase()),
            recipient_id: to,
            recipient_name: name_of(to).to_string(),
            recipient_email: format!("{}@test.com", name_of(to).to_lowercase()),
            content: content.to_string(),
            app_id: app.map(|(id, _)| id),
            app_title: app.map(|(_, title)| title.to_string()),
            read,
            created_at: at,
        }
    }

    fn find(conversations: &[ConversationDTO], partner_id: i32) -> &ConversationDTO {
        conversations
            .iter()
            .find(|c| c.partner.id == partner_id)
            .expect("conversation for partner")
    }

    #[test]
    fn test_no_messages_gives_empty_list() {
        assert!(aggregate_conversations(ALICE, Vec::new()).is_empty());
    }

    #[test]
    fn test_one_entry_per_distinct_partner() {
        let messages = vec![
            msg(1, ALICE, BOB, "a", t(0), false, None),
            msg(2, BOB, ALICE, "b", t(1), false, None),
            msg(3, CAROL, ALICE, "c", t(2), false, None),
            msg(4, ALICE, CAROL, "d", t(3), false, None),
            msg(5, ALICE, BOB, "e", t(4), false, None),
        ];
        let partners: HashSet<i32> = messages.iter().map(|m| m.partner_of(ALICE)).collect();

        let conversations = aggregate_conversations(ALICE, messages);

        assert_eq!(conversations.len(), partners.len());
        let ids: HashSet<i32> = conversations.iter().map(|c| c.partner.id).collect();
        assert_eq!(ids, partners);
    }

    #[test]
    fn test_hello_hi_again_scenario() {
        let messages = vec![
            msg(1, ALICE, BOB, "hello", t(1), false, None),
            msg(2, BOB, ALICE, "hi", t(2), false, None),
            msg(3, ALICE, BOB, "again", t(3), false, None),
        ];

        let for_alice = aggregate_conversations(ALICE, messages.clone());
        assert_eq!(for_alice.len(), 1);
        assert_eq!(for_alice[0].partner.full_name, "Bob");
        assert_eq!(for_alice[0].last_message, "again");
        assert_eq!(for_alice[0].last_message_time, t(3));
        assert_eq!(for_alice[0].unread_count, 1);

        let for_bob = aggregate_conversations(BOB, messages);
        assert_eq!(for_bob.len(), 1);
        assert_eq!(for_bob[0].partner.id, ALICE);
        assert_eq!(for_bob[0].last_message, "again");
        assert_eq!(for_bob[0].unread_count, 2);
    }

    #[test]
    fn test_input_order_does_not_change_the_seed() {
        let ascending = vec![
            msg(1, BOB, ALICE, "old", t(0), true, Some((10, "Fitness"))),
            msg(2, BOB, ALICE, "new", t(5), false, Some((20, "Budget"))),
        ];
        let mut descending = ascending.clone();
        descending.reverse();

        for input in [ascending, descending] {
            let conversations = aggregate_conversations(ALICE, input);
            let bob = find(&conversations, BOB);
            assert_eq!(bob.last_message, "new");
            assert_eq!(bob.app.as_ref().map(|a| a.title.as_str()), Some("Budget"));
        }
    }

    #[test]
    fn test_timestamp_ties_pick_highest_id() {
        let messages = vec![
            msg(7, BOB, ALICE, "second", t(0), false, None),
            msg(3, BOB, ALICE, "first", t(0), false, None),
        ];
        let conversations = aggregate_conversations(ALICE, messages);
        assert_eq!(conversations[0].last_message, "second");
    }

    #[test]
    fn test_unread_counts_every_message_not_just_the_seed() {
        let messages = vec![
            msg(1, BOB, ALICE, "one", t(0), false, None),
            msg(2, BOB, ALICE, "two", t(1), false, None),
            msg(3, BOB, ALICE, "three", t(2), true, None),
            msg(4, ALICE, BOB, "reply", t(3), false, None),
            msg(5, CAROL, ALICE, "hey", t(4), false, None),
        ];

        let conversations = aggregate_conversations(ALICE, messages);

        let bob = find(&conversations, BOB);
        assert_eq!(bob.last_message, "reply");
        assert_eq!(bob.unread_count, 2);
        assert_eq!(find(&conversations, CAROL).unread_count, 1);
    }

    #[test]
    fn test_several_apps_collapse_into_one_conversation() {
        let messages = vec![
            msg(1, BOB, ALICE, "about fitness", t(0), false, Some((10, "Fitness"))),
            msg(2, ALICE, BOB, "about budget", t(1), false, Some((20, "Budget"))),
            msg(3, BOB, ALICE, "no context", t(2), false, None),
        ];

        let conversations = aggregate_conversations(ALICE, messages);

        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].last_message, "no context");
        assert!(conversations[0].app.is_none());
    }

    #[test]
    fn test_message_to_self_is_its_own_conversation() {
        let messages = vec![msg(1, ALICE, ALICE, "note to self", t(0), false, None)];

        let conversations = aggregate_conversations(ALICE, messages);

        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].partner.id, ALICE);
        assert_eq!(conversations[0].unread_count, 1);
    }

    #[test]
    fn test_sort_by_recent_activity() {
        let messages = vec![
            msg(1, CAROL, ALICE, "carol", t(10), false, None),
            msg(2, BOB, ALICE, "bob", t(20), false, None),
        ];
        let mut conversations = aggregate_conversations(ALICE, messages);
        conversations.reverse();

        sort_by_recent_activity(&mut conversations);

        let order: Vec<i32> = conversations.iter().map(|c| c.partner.id).collect();
        assert_eq!(order, vec![BOB, CAROL]);
    }
}
