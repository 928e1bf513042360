diesel::table! {
    slots (id) {
        id -> Uuid,
        date -> Date,
        heure -> Varchar,
        ferme -> Bool,
        motif_fermeture -> Nullable<Varchar>,
    }
}

diesel::table! {
    appointments (id) {
        id -> Uuid,
        date -> Date,
        heure -> Varchar,
        client_name -> Varchar,
        motif -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(slots, appointments);
