//! Selector vocabularies for each admin entity type.

selector_by! {
    /// How an account is identified.
    pub enum AccountBy {
        AdminName => "adminName",
        AppAdminName => "appAdminName",
        Id => "id",
        ForeignPrincipal => "foreignPrincipal",
        Name => "name",
        Krb5Principal => "krb5Principal",
    }
}

selector_by! {
    pub enum AlwaysOnClusterBy {
        Id => "id",
        Name => "name",
    }
}

selector_by! {
    /// How an entry to flush from a server cache is identified.
    pub enum CacheEntryBy {
        Id => "id",
        Name => "name",
    }
}

selector_by! {
    /// Kind of server cache to flush.
    pub enum CacheEntryType {
        Acl => "acl",
        Locale => "locale",
        Skin => "skin",
        UiStrings => "uistrings",
        License => "license",
        All => "all",
        Account => "account",
        Config => "config",
        GlobalGrant => "globalgrant",
        Cos => "cos",
        Domain => "domain",
        GalGroup => "galgroup",
        Group => "group",
        Mime => "mime",
        Server => "server",
        AlwaysOnCluster => "alwaysOnCluster",
        Zimlet => "zimlet",
    }
}

selector_by! {
    pub enum CalendarResourceBy {
        Id => "id",
        ForeignPrincipal => "foreignPrincipal",
        Name => "name",
    }
}

selector_by! {
    /// How a class of service is identified.
    pub enum CosBy {
        Id => "id",
        Name => "name",
    }
}

selector_by! {
    pub enum DistributionListBy {
        Id => "id",
        Name => "name",
    }
}

selector_by! {
    /// How a domain is identified.
    pub enum DomainBy {
        Id => "id",
        Name => "name",
        VirtualHostname => "virtualHostname",
        /// Kerberos realm
        Krb => "krb",
        ForeignName => "foreignName",
    }
}

selector_by! {
    /// Which items a mailbox re-index targets.
    pub enum ReIndexBy {
        Types => "types",
        Ids => "ids",
    }
}

selector_by! {
    pub enum ServerBy {
        Id => "id",
        Name => "name",
        ServiceHostname => "serviceHostname",
    }
}

selector_by! {
    pub enum UcServiceBy {
        Id => "id",
        Name => "name",
    }
}

selector_by! {
    pub enum XmppComponentBy {
        Id => "id",
        Name => "name",
        ServiceHostname => "serviceHostname",
    }
}

selector_by! {
    pub enum ZimletBy {
        Id => "id",
        Name => "name",
    }
}
